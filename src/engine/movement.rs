use log::debug;
use rand::Rng;

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::{GameState, Mode};

impl<R: Rng> GameState<R> {
    /// Walk through the door labeled `target`, if the current room has one.
    pub fn open_door(&mut self, out: &mut Output, target: usize) {
        let here = self.player.room;

        if target == here {
            out.say(format!("No need. You are already in room {}!", target));
            return;
        }

        if !self.map.is_adjacent(here, target) {
            out.say(format!("You can't find the door with number {}.", target));
            return;
        }

        out.separator();
        out.title(format!("Opening door {}", target));
        self.player.room = target;
        debug!("player moved {} -> {}", here, target);

        let chance = self.rules.move_encounter_chance;
        self.roll_encounter(chance);
        self.render_current_room(out);
    }

    /// Flee the monster through a random door of the room being left.
    pub fn run_away(&mut self, out: &mut Output) {
        self.monster = None;

        let doors = self
            .map
            .room(self.player.room)
            .map(|r| r.connections.clone())
            .unwrap_or_default();

        out.separator();
        if doors.is_empty() {
            out.say("There is no door to run through, but the monster loses track of you.");
        } else {
            let pick = ((self.rng().r#gen::<f64>() * doors.len() as f64) as usize).min(doors.len() - 1);
            debug!("player fled {} -> {}", self.player.room, doors[pick]);
            self.player.room = doors[pick];
            out.say("You run away through a randomly selected door!");
        }

        let chance = self.rules.flee_encounter_chance;
        self.roll_encounter(chance);
        self.render_current_room(out);
    }

    pub(crate) fn render_current_room(&self, out: &mut Output) {
        render_room(
            out,
            &self.map,
            &self.player,
            self.mode() == Mode::Battling,
        );
    }
}
