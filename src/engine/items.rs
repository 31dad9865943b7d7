use log::debug;
use rand::Rng;

use crate::GameState;
use crate::engine::output::Output;
use crate::engine::player::{CURRENCY_NAME, item_exists};
use crate::engine::render::format_currency;

impl<R: Rng> GameState<R> {
    /// Pick up `item` from the current room. Names are matched exactly
    /// (the dispatcher lower-cases input).
    pub fn pickup_item(&mut self, out: &mut Output, item: &str) {
        if !item_exists(item) {
            out.say(format!("'{}' is not a valid in-game item!", item));
            return;
        }
        if !self.player.can_carry(item) {
            out.say("This item is not available for your class.");
            return;
        }

        let profile = self.player.class.profile();
        let Some(room) = self.map.room_mut(self.player.room) else {
            out.say(format!("There is no {} in the room.", item));
            return;
        };

        if item == CURRENCY_NAME && room.currency > 0 {
            let amount = room.currency;
            room.currency = 0;
            self.player.currency += amount;
            debug!("picked up {} currency, now {}", amount, self.player.currency);

            out.separator();
            out.say(format!(
                "You pick up the {}, increasing your {} to {}",
                CURRENCY_NAME,
                CURRENCY_NAME,
                format_currency(self.player.currency)
            ));
        } else if item == profile.secondary_item && room.has_secondary_weapon {
            room.has_secondary_weapon = false;
            out.separator();
            out.say(self.player.equip_secondary());
        } else if item == profile.primary_item && room.has_primary_weapon {
            room.has_primary_weapon = false;
            out.separator();
            out.say(self.player.equip_primary());
        } else {
            out.say(format!("There is no {} in the room.", item));
            return;
        }

        self.render_current_room(out);
    }
}
