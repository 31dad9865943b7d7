use log::debug;
use rand::Rng;

use crate::engine::combat::{Combatant, roll_percent};
use crate::engine::player::PLAYER_MAX_HEALTH;

pub const MONSTER_MAX_HEALTH: f64 = 325.0;
pub const MONSTER_MIN_HEALTH: f64 = 100.0;

/// Monsters hit for about a tenth of the player's health, give or take five.
const DAMAGE_AVERAGE: f64 = PLAYER_MAX_HEALTH / 10.0;
const DAMAGE_AVERAGE_SPREAD: f64 = 5.0;
const MAX_CURRENCY_DROP: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub damage_average: f64,
    pub currency: u32,
    full_health: f64,
    health: f64,
}

impl Monster {
    pub fn new(health: f64, damage_average: f64, currency: u32) -> Self {
        Monster {
            damage_average,
            currency,
            full_health: health,
            health,
        }
    }

    /// Spawn a monster with `chance` percent probability.
    pub fn generate_randomly<R: Rng + ?Sized>(chance: f64, rng: &mut R) -> Option<Monster> {
        let roll = roll_percent(rng);
        if roll >= chance {
            debug!("no encounter (rolled {:.1} against {:.0}%)", roll, chance);
            return None;
        }

        let health =
            MONSTER_MAX_HEALTH - rng.r#gen::<f64>() * (MONSTER_MAX_HEALTH - MONSTER_MIN_HEALTH);
        let damage_average =
            rng.r#gen::<f64>() * DAMAGE_AVERAGE_SPREAD * 2.0 - DAMAGE_AVERAGE_SPREAD + DAMAGE_AVERAGE;
        let currency = (rng.r#gen::<f64>() * MAX_CURRENCY_DROP).floor() as u32;

        debug!(
            "encounter: health {:.1}, damage {:.1}, carrying {}",
            health, damage_average, currency
        );
        Some(Monster::new(health, damage_average, currency))
    }
}

impl Combatant for Monster {
    fn health(&self) -> f64 {
        self.health
    }

    fn full_health(&self) -> f64 {
        self.full_health
    }

    fn set_health(&mut self, health: f64) -> f64 {
        let before = self.health;
        self.health = health.clamp(0.0, self.full_health);
        (before - self.health).abs()
    }
}
