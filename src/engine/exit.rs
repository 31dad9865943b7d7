use log::debug;
use rand::Rng;

use crate::engine::output::Output;
use crate::engine::player::CURRENCY_NAME;
use crate::engine::render::format_currency;
use crate::{GameState, Outcome, Prompt};

/// What the player does when facing the exit guardians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Pay,
    Fight,
    Return,
}

impl ExitChoice {
    /// Parse a menu selection "1".."3".
    pub fn from_selection(input: &str) -> Option<ExitChoice> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(ExitChoice::Pay),
            2 => Some(ExitChoice::Fight),
            3 => Some(ExitChoice::Return),
            _ => None,
        }
    }
}

impl<R: Rng> GameState<R> {
    /// Look for the way out. At the exit this opens the guardian prompt,
    /// which stays open until a choice resolves it.
    pub fn search_for_exit(&mut self, out: &mut Output) {
        if !self.map.is_exit(self.player.room) {
            out.say("You found nothing.");
            return;
        }

        out.separator();
        out.say(format!(
            "You see the exit and try to approach it. \
             You notice two guardians standing side by side and blocking the passage. \
             The guardians demand {} {} from you. If you pay, they will let you out.",
            format_currency(self.rules.exit_toll),
            CURRENCY_NAME
        ));
        out.say("1. Pay");
        out.say("2. Fight");
        out.say("3. Return back");
        self.open_prompt(Prompt::ExitNegotiation);
    }

    /// Feed raw input to the guardian prompt; invalid input re-prompts.
    pub(crate) fn choose_exit_option(&mut self, out: &mut Output, input: &str) {
        match ExitChoice::from_selection(input) {
            Some(choice) => self.resolve_exit(out, choice),
            None => out.say("Invalid input. Please enter a number between 1 and 3 inclusive."),
        }
    }

    /// Apply a guardian choice. Only a successful payment ends the game;
    /// an unaffordable payment leaves the prompt open.
    pub fn resolve_exit(&mut self, out: &mut Output, choice: ExitChoice) {
        let room = self.player.room;
        debug!("exit choice {:?} with {} currency", choice, self.player.currency);

        match choice {
            ExitChoice::Pay if self.player.currency >= self.rules.exit_toll => {
                out.separator();
                out.say(format!(
                    "The guardians are impressed with your generosity and refuse to take {}.",
                    CURRENCY_NAME
                ));
                out.say("You are accompanied to the exit. Your quest has ended!");
                out.say(format!(
                    "You have {} {} in total.",
                    format_currency(self.player.currency),
                    CURRENCY_NAME
                ));
                self.close_prompt();
                self.end_game(Outcome::Escaped);
            }
            ExitChoice::Pay => {
                out.say(format!("You don't have that much {}.", CURRENCY_NAME));
            }
            ExitChoice::Fight => {
                out.separator();
                out.say(format!(
                    "You make your first hit. Since the guardians are twice as big as you \
                     and are made from stone, your action has no effect. \
                     You are thrown back to room {}.",
                    room
                ));
                self.close_prompt();
            }
            ExitChoice::Return => {
                out.separator();
                out.say(format!("You are back to room {}.", room));
                self.close_prompt();
            }
        }
    }
}
