mod actions;
mod combat;
mod commands;
mod exit;
mod items;
mod monster;
mod movement;
mod output;
mod player;
mod render;
mod rules;

pub use combat::{Combatant, Strike, monster_strikes, player_strikes};
pub use commands::{COMMANDS, Command, CommandKind, available_commands, dispatch, find_command};
pub use exit::ExitChoice;
pub use monster::{MONSTER_MAX_HEALTH, MONSTER_MIN_HEALTH, Monster};
pub use output::{Output, OutputBlock};
pub use player::{
    CURRENCY_NAME, ClassProfile, ITEM_VOCABULARY, PLAYER_MAX_HEALTH, Player, PlayerClass,
    item_exists,
};
pub use render::{health_status, render_room, render_self};
pub use rules::Rules;
