use crate::engine::combat::Combatant;
use crate::engine::monster::Monster;
use crate::engine::output::Output;
use crate::engine::player::{CURRENCY_NAME, Player};
use crate::world;

pub fn format_health(points: f64) -> String {
    format!("{:.0}", points)
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

pub fn format_currency(amount: u32) -> String {
    format!("${}", amount)
}

/// `current/max (percent)`
pub fn health_status(c: &impl Combatant) -> String {
    format!(
        "{}/{} ({})",
        format_health(c.health()),
        format_health(c.full_health()),
        format_percent(c.health() / c.full_health())
    )
}

pub fn player_health_line(player: &Player) -> String {
    format!("Your health status: {}", health_status(player))
}

pub fn monster_health_line(monster: &Monster) -> String {
    format!("Monster's health status: {}", health_status(monster))
}

pub fn render_monster_warning(out: &mut Output) {
    out.event("A monster rushes towards you!");
    out.event("Prepare for battle!");
}

pub fn render_room(out: &mut Output, map: &world::Map, player: &Player, battling: bool) {
    let Some(room) = map.room(player.room) else {
        out.say(format!("You are lost somewhere outside room {}.", player.room));
        return;
    };

    out.say(room.description.clone());

    if !room.connections.is_empty() {
        let doors = room
            .connections
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if room.connections.len() == 1 {
            out.say(format!("There is a door labeled with the number {}", doors));
        } else {
            out.say(format!("There are doors labeled with numbers {}", doors));
        }
    }

    let profile = player.class.profile();
    if room.currency > 0 {
        out.say(format!(
            "There is {} of {} on the floor in front of you.",
            format_currency(room.currency),
            CURRENCY_NAME
        ));
    }
    if room.has_primary_weapon {
        out.say(format!(
            "There is a {} on the floor in front of you.",
            profile.primary_item
        ));
    }
    if room.has_secondary_weapon {
        out.say(profile.secondary_floor_text);
    }

    out.say(player_health_line(player));

    if battling {
        render_monster_warning(out);
    }
}

pub fn render_self(out: &mut Output, player: &Player) {
    out.say(player_health_line(player));

    let profile = player.class.profile();
    let mut possessions = vec![format!(
        "{} {}",
        format_currency(player.currency),
        CURRENCY_NAME
    )];
    if player.has_primary_weapon {
        possessions.push(profile.primary_item.to_string());
    }
    if player.has_secondary_weapon {
        possessions.push(profile.secondary_item.to_string());
    }

    out.say(format!("You have: {}", possessions.join(", ")));
    out.say(format!("You are in room {}", player.room));
}
