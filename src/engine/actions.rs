use log::debug;
use rand::Rng;

use crate::engine::combat::{Combatant, Strike, monster_strikes, player_strikes, roll_percent};
use crate::engine::monster::Monster;
use crate::engine::output::Output;
use crate::engine::player::CURRENCY_NAME;
use crate::engine::render::{format_currency, format_percent, player_health_line, render_monster_warning};
use crate::{GameState, Outcome};

impl<R: Rng> GameState<R> {
    /// Hit the monster; if it survives (and you connected) it hits back.
    pub fn attack_monster(&mut self, out: &mut Output) {
        let Some(mut monster) = self.monster.take() else {
            return;
        };

        out.separator();
        let strike = player_strikes(out, &self.player, &mut monster, &mut self.rng);

        if monster.is_defeated() {
            out.separator();
            out.say("The monster has been defeated!");
            out.say(format!(
                "The monster drops {} in {}",
                format_currency(monster.currency),
                CURRENCY_NAME
            ));
            if let Some(room) = self.map.room_mut(self.player.room) {
                room.currency += monster.currency;
            }
            debug!("monster defeated, dropped {}", monster.currency);
            return;
        }

        if strike != Strike::Missed {
            self.monster_turn(out, &monster);
        }
        if !self.is_over() {
            self.monster = Some(monster);
        }
    }

    /// Stand still. The monster may lose interest; otherwise it attacks.
    pub fn ignore_monster(&mut self, out: &mut Output) {
        let Some(monster) = self.monster.take() else {
            return;
        };

        out.separator();
        out.say("You stand still and do nothing...");

        let roll = roll_percent(self.rng());
        if roll <= self.rules.ignore_escape_chance {
            out.say("The monster runs away! You are lucky!");
            return;
        }

        self.monster_turn(out, &monster);
        if !self.is_over() {
            self.monster = Some(monster);
        }
    }

    /// Recover some health, at the risk of being found.
    pub fn rest(&mut self, out: &mut Output) {
        out.separator();
        out.say("You decide to stop and have a rest...");

        let max = self.player.full_health();
        let healed = self
            .player
            .set_health(self.player.health() + max * self.rules.rest_heal_fraction);
        out.say(format!(
            "Your health increases by {}. {}",
            format_percent(healed / max),
            player_health_line(&self.player)
        ));

        let chance = self.rules.rest_encounter_chance;
        if self.roll_encounter(chance) {
            render_monster_warning(out);
        }
    }

    fn monster_turn(&mut self, out: &mut Output, monster: &Monster) {
        monster_strikes(out, monster, &mut self.player, &mut self.rng);
        if self.player.is_defeated() {
            out.separator();
            out.say("You did not survive.");
            out.say("End of game :)");
            self.end_game(Outcome::Defeated);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Combatant, Monster, Output, PlayerClass, Rules};
    use crate::{GameState, Mode, Outcome, load_map_from_str};
    use rand::rngs::mock::StepRng;

    fn state(class: PlayerClass, rng: StepRng) -> GameState<StepRng> {
        let map = load_map_from_str(
            "2\n1\n@connect\n2\n2\n@connect\n1\n",
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        GameState::with_rng(map, class, Rules::default(), rng)
    }

    #[test]
    fn attacking_nothing_changes_nothing() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(0, 0));
        let mut out = Output::new();
        s.attack_monster(&mut out);
        s.ignore_monster(&mut out);
        assert!(out.blocks.is_empty());
        assert_eq!(s.player.health(), 750.0);
        assert_eq!(s.mode(), Mode::Exploring);
    }

    #[test]
    fn killing_blow_drops_currency_into_room() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(0, 0));
        s.map.room_mut(1).unwrap().currency = 11;
        s.monster = Some(Monster::new(20.0, 75.0, 42));
        let mut out = Output::new();
        s.attack_monster(&mut out);

        assert!(s.monster.is_none());
        assert_eq!(s.mode(), Mode::Exploring);
        assert_eq!(s.map.room(1).unwrap().currency, 53);
        assert_eq!(s.player.health(), 750.0);
        assert!(out.contains("The monster drops $42 in silver"));
    }

    #[test]
    fn surviving_monster_hits_back() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(0, 0));
        s.monster = Some(Monster::new(300.0, 75.0, 5));
        let mut out = Output::new();
        s.attack_monster(&mut out);

        let monster = s.monster.as_ref().unwrap();
        assert_eq!(monster.health(), 270.0);
        assert_eq!(s.player.health(), 685.0);
        assert_eq!(s.mode(), Mode::Battling);
    }

    #[test]
    fn a_miss_gives_the_monster_no_free_hit() {
        let mut s = state(PlayerClass::Programmer, StepRng::new(u64::MAX, 0));
        s.monster = Some(Monster::new(300.0, 75.0, 5));
        let mut out = Output::new();
        s.attack_monster(&mut out);

        assert_eq!(s.player.health(), 750.0);
        assert_eq!(s.monster.as_ref().unwrap().health(), 300.0);
    }

    #[test]
    fn dying_ends_the_game() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(u64::MAX, 0));
        s.player.set_health(10.0);
        s.monster = Some(Monster::new(300.0, 75.0, 5));
        let mut out = Output::new();
        s.ignore_monster(&mut out);

        assert_eq!(s.player.health(), 0.0);
        assert_eq!(s.outcome(), Some(Outcome::Defeated));
        assert!(out.contains("You did not survive."));
    }

    #[test]
    fn ignored_monster_may_leave() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(0, 0));
        s.monster = Some(Monster::new(300.0, 75.0, 5));
        let mut out = Output::new();
        s.ignore_monster(&mut out);
        assert!(s.monster.is_none());
        assert_eq!(s.player.health(), 750.0);
        assert!(out.contains("The monster runs away!"));
    }

    #[test]
    fn rest_heals_a_tenth_and_caps_at_max() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(u64::MAX, 0));
        s.player.set_health(700.0);
        let mut out = Output::new();
        s.rest(&mut out);
        assert_eq!(s.player.health(), 750.0);
        assert!(out.contains("Your health increases by 7%"));
        assert_eq!(s.mode(), Mode::Exploring);

        s.player.set_health(100.0);
        s.rest(&mut Output::new());
        assert_eq!(s.player.health(), 175.0);
    }

    #[test]
    fn rest_can_be_interrupted() {
        let mut s = state(PlayerClass::Warrior, StepRng::new(0, 0));
        let mut out = Output::new();
        s.rest(&mut out);
        assert_eq!(s.mode(), Mode::Battling);
        assert!(out.contains("A monster rushes towards you!"));
    }
}
