use serde::Deserialize;

/// Tunable game balance. Defaults are the standard game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Silver the exit guardians ask for.
    pub exit_toll: u32,
    /// Percent chance of a monster when opening a door.
    pub move_encounter_chance: f64,
    /// Percent chance of a monster interrupting a rest.
    pub rest_encounter_chance: f64,
    /// Percent chance of a monster behind the door you flee through.
    pub flee_encounter_chance: f64,
    /// Percent chance an ignored monster wanders off.
    pub ignore_escape_chance: f64,
    /// Fraction of max health restored by resting.
    pub rest_heal_fraction: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            exit_toll: 1000,
            move_encounter_chance: 50.0,
            rest_encounter_chance: 30.0,
            flee_encounter_chance: 30.0,
            ignore_escape_chance: 30.0,
            rest_heal_fraction: 0.1,
        }
    }
}
