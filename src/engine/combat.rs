use log::{debug, trace};
use rand::Rng;

use crate::engine::monster::Monster;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::engine::render::{format_health, format_percent, monster_health_line, player_health_line};

/// Shared health shape of everything that can be hit.
pub trait Combatant {
    fn health(&self) -> f64;

    fn full_health(&self) -> f64;

    /// Set health, clamped to this combatant's bounds.
    /// Returns the magnitude of the change actually applied.
    fn set_health(&mut self, health: f64) -> f64;

    fn is_defeated(&self) -> bool {
        self.health() <= 0.0
    }

    fn take_damage(&mut self, amount: f64) -> f64 {
        let current = self.health();
        self.set_health(current - amount.max(0.0))
    }
}

/// Spread applied around every base or average damage value.
pub const DAMAGE_SPREAD: f64 = 10.0;

/// Damage multiplier granted by a primary weapon.
pub const PRIMARY_WEAPON_MULTIPLIER: f64 = 2.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strike {
    Missed,
    Blocked,
    Hit { damage: f64, health_lost: f64 },
}

/// Uniform roll in `[0, 100)`.
pub(crate) fn roll_percent<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen::<f64>() * 100.0
}

/// Uniform value in `[-spread, spread)`.
fn roll_spread<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    rng.r#gen::<f64>() * spread * 2.0 - spread
}

/// The player hits the monster. Class modifiers come from the player's profile.
pub fn player_strikes<R: Rng + ?Sized>(
    out: &mut Output,
    player: &Player,
    monster: &mut Monster,
    rng: &mut R,
) -> Strike {
    let profile = player.class.profile();

    if let Some((miss_chance, miss_text)) = profile.miss_without_secondary {
        if !player.has_secondary_weapon && roll_percent(rng) >= 100.0 - miss_chance {
            debug!("player attack missed");
            out.say(miss_text);
            return Strike::Missed;
        }
    }

    let mut damage = profile.base_damage + roll_spread(rng, DAMAGE_SPREAD);
    if player.has_primary_weapon {
        damage *= PRIMARY_WEAPON_MULTIPLIER;
    }
    let damage = damage.max(0.0);
    let health_lost = monster.take_damage(damage);
    trace!("player dealt {:.2}, monster at {:.2}", damage, monster.health());

    if player.has_primary_weapon && profile.garbles_on_primary_hit {
        out.event(keyboard_symbols(rng));
    }

    let weapon = if player.has_primary_weapon {
        profile.primary_item
    } else {
        "bare hands"
    };
    out.say(format!(
        "You struck the monster with your {}, dealing {} damage points!",
        weapon,
        format_health(damage)
    ));
    out.say(format!(
        "The monster loses {} Health. {}",
        format_percent(health_lost / monster.full_health()),
        monster_health_line(monster)
    ));

    Strike::Hit {
        damage,
        health_lost,
    }
}

/// The monster hits the player, unless the player's class can block it.
pub fn monster_strikes<R: Rng + ?Sized>(
    out: &mut Output,
    monster: &Monster,
    player: &mut Player,
    rng: &mut R,
) -> Strike {
    let profile = player.class.profile();

    if let Some((block_chance, block_text)) = profile.block_with_secondary {
        if player.has_secondary_weapon && roll_percent(rng) <= block_chance {
            debug!("monster attack blocked");
            out.say(block_text);
            return Strike::Blocked;
        }
    }

    let damage = (monster.damage_average + roll_spread(rng, DAMAGE_SPREAD)).max(0.0);
    let health_lost = player.take_damage(damage);
    trace!("monster dealt {:.2}, player at {:.2}", damage, player.health());

    out.say(format!(
        "The monster deals {} damage points!",
        format_health(damage)
    ));
    out.say(format!(
        "You lose {} Health. {}",
        format_percent(health_lost / player.full_health()),
        player_health_line(player)
    ));

    Strike::Hit {
        damage,
        health_lost,
    }
}

/// Twenty printable ASCII characters, the sound of a keyboard hitting something.
fn keyboard_symbols<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..20).map(|_| rng.gen_range(32u8..127u8) as char).collect()
}
