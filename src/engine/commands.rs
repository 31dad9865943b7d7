use log::trace;
use rand::Rng;

use crate::engine::output::Output;
use crate::engine::render::{render_room, render_self};
use crate::{GameState, Mode, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Open,
    Pickup,
    Search,
    Attack,
    Run,
    Ignore,
    RoomInfo,
    SelfInfo,
    Rest,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Availability {
    Exploring,
    Battling,
    Always,
}

#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub kind: CommandKind,
    pub name: &'static str,
    pub args: usize,
    pub description: &'static str,
    availability: Availability,
}

impl Command {
    const fn new(
        kind: CommandKind,
        name: &'static str,
        args: usize,
        availability: Availability,
        description: &'static str,
    ) -> Self {
        Command {
            kind,
            name,
            args,
            description,
            availability,
        }
    }

    pub fn available_in(&self, mode: Mode) -> bool {
        match self.availability {
            Availability::Always => true,
            Availability::Exploring => mode == Mode::Exploring,
            Availability::Battling => mode == Mode::Battling,
        }
    }

    fn arity_message(&self) -> String {
        match self.args {
            0 => format!("No arguments for command '{}' are required.", self.name),
            1 => format!(
                "Invalid number of arguments. Please enter command '{}' followed by a space and one argument.",
                self.name
            ),
            _ => format!("Invalid number of arguments for command '{}'", self.name),
        }
    }
}

#[rustfmt::skip]
pub const COMMANDS: [Command; 11] = [
    Command::new(CommandKind::Open, "open", 1, Availability::Exploring,
        "OPEN n          open the door labeled n and enter the room"),
    Command::new(CommandKind::Pickup, "pickup", 1, Availability::Exploring,
        "PICKUP item     pick up an item in the room"),
    Command::new(CommandKind::Search, "search", 0, Availability::Exploring,
        "SEARCH          search the room to find the exit"),
    Command::new(CommandKind::Attack, "attack", 0, Availability::Battling,
        "ATTACK          hit the monster in the room"),
    Command::new(CommandKind::Run, "run", 0, Availability::Battling,
        "RUN             run away from the monster going through a randomly selected door"),
    Command::new(CommandKind::Ignore, "ignore", 0, Availability::Battling,
        "IGNORE          stand still and wait to see if the monster leaves you in peace"),
    Command::new(CommandKind::RoomInfo, "roominfo", 0, Availability::Always,
        "ROOMINFO        displays information about the current room"),
    Command::new(CommandKind::SelfInfo, "selfinfo", 0, Availability::Always,
        "SELFINFO        displays your current health, possessions and room number"),
    Command::new(CommandKind::Rest, "rest", 0, Availability::Exploring,
        "REST            have a rest and restore your health"),
    Command::new(CommandKind::Help, "help", 0, Availability::Always,
        "HELP            displays available commands in the current context"),
    Command::new(CommandKind::Quit, "quit", 0, Availability::Always,
        "QUIT            give up and leave the game"),
];

pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

pub fn available_commands(mode: Mode) -> impl Iterator<Item = &'static Command> {
    COMMANDS.iter().filter(move |c| c.available_in(mode))
}

/// Route one line of input to a session operation. Every rejection is a
/// message; the session is only touched once the command is fully valid.
pub fn dispatch<R: Rng>(state: &mut GameState<R>, out: &mut Output, input: &str) {
    let lower = input.trim().to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return;
    };

    let Some(command) = find_command(verb) else {
        out.say(format!("'{}' is not a valid in-game command!", verb));
        return;
    };

    let mode = state.mode();
    if !command.available_in(mode) {
        out.say(format!("Command '{}' is not available at the moment.", verb));
        return;
    }

    if args.len() != command.args {
        out.say(command.arity_message());
        return;
    }

    trace!("dispatch {:?} {:?} in {:?}", command.kind, args, mode);
    match command.kind {
        CommandKind::Open => match args[0].parse::<usize>() {
            Ok(room) => state.open_door(out, room),
            Err(_) => out.say(format!(
                "Invalid argument '{}' for command '{}'.",
                args[0], command.name
            )),
        },
        CommandKind::Pickup => state.pickup_item(out, args[0]),
        CommandKind::Search => state.search_for_exit(out),
        CommandKind::Attack => state.attack_monster(out),
        CommandKind::Run => state.run_away(out),
        CommandKind::Ignore => state.ignore_monster(out),
        CommandKind::RoomInfo => {
            out.separator();
            render_room(out, &state.map, &state.player, mode == Mode::Battling);
        }
        CommandKind::SelfInfo => {
            out.separator();
            render_self(out, &state.player);
        }
        CommandKind::Rest => state.rest(out),
        CommandKind::Help => {
            out.separator();
            out.say("At the moment, the following commands are available:");
            for c in available_commands(mode) {
                out.say(c.description);
            }
        }
        CommandKind::Quit => {
            out.say("Goodbye.");
            state.end_game(Outcome::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Monster, PlayerClass, Rules};
    use crate::load_map_from_str;
    use rand::rngs::mock::StepRng;

    fn state() -> GameState<StepRng> {
        let map = load_map_from_str("2\n1\n@connect\n2\n2\n@connect\n1\n", &mut StepRng::new(0, 0))
            .unwrap();
        GameState::with_rng(map, PlayerClass::Warrior, Rules::default(), StepRng::new(u64::MAX, 0))
    }

    fn run(state: &mut GameState<StepRng>, input: &str) -> Output {
        let mut out = Output::new();
        dispatch(state, &mut out, input);
        out
    }

    #[test]
    fn command_table_matches_modes() {
        let exploring: Vec<&str> = available_commands(Mode::Exploring).map(|c| c.name).collect();
        assert_eq!(
            exploring,
            ["open", "pickup", "search", "roominfo", "selfinfo", "rest", "help", "quit"]
        );
        let battling: Vec<&str> = available_commands(Mode::Battling).map(|c| c.name).collect();
        assert_eq!(
            battling,
            ["attack", "run", "ignore", "roominfo", "selfinfo", "help", "quit"]
        );
    }

    #[test]
    fn unknown_and_unavailable_commands_are_reported() {
        let mut s = state();
        assert_eq!(run(&mut s, "dance").text(), "'dance' is not a valid in-game command!");
        assert_eq!(
            run(&mut s, "attack").text(),
            "Command 'attack' is not available at the moment."
        );

        s.monster = Some(Monster::new(100.0, 75.0, 1));
        assert_eq!(
            run(&mut s, "open 2").text(),
            "Command 'open' is not available at the moment."
        );
        assert_eq!(s.player.room, 1);
    }

    #[test]
    fn arity_is_checked() {
        let mut s = state();
        assert_eq!(
            run(&mut s, "search now").text(),
            "No arguments for command 'search' are required."
        );
        assert!(run(&mut s, "open").contains("followed by a space and one argument"));
        assert!(run(&mut s, "open 1 2").contains("followed by a space and one argument"));
        assert_eq!(s.player.room, 1);
    }

    #[test]
    fn open_needs_a_number() {
        let mut s = state();
        assert_eq!(
            run(&mut s, "open two").text(),
            "Invalid argument 'two' for command 'open'."
        );
        run(&mut s, "  OPEN   2 ");
        assert_eq!(s.player.room, 2);
    }

    #[test]
    fn info_commands_work_in_battle() {
        let mut s = state();
        s.monster = Some(Monster::new(100.0, 75.0, 1));
        assert!(run(&mut s, "roominfo").contains("Prepare for battle!"));
        assert!(run(&mut s, "selfinfo").contains("You are in room 1"));
        let help = run(&mut s, "help");
        assert!(help.contains("ATTACK"));
        assert!(!help.contains("OPEN"));
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut s = state();
        assert!(run(&mut s, "   ").blocks.is_empty());
    }

    #[test]
    fn quit_ends_the_game() {
        let mut s = state();
        run(&mut s, "quit");
        assert_eq!(s.outcome(), Some(Outcome::Quit));
    }
}
