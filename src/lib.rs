pub mod config;
pub mod engine;
pub mod world;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use engine::{Monster, Output, Player, PlayerClass, Rules, render_room};
use world::Map;

pub use world::{MapError, load_map_from_file, load_map_from_str};

/// Which command set is live. Derived from whether a monster is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Exploring,
    Battling,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Escaped,
    Defeated,
    Quit,
}

/// A forced choice the session is waiting on. While set, input is read as a
/// selection instead of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prompt {
    ExitNegotiation,
}

/// One game in progress. Randomness comes only from `rng`, so a seeded or
/// scripted generator gives a fully reproducible session.
pub struct GameState<R = StdRng> {
    pub map: Map,
    pub player: Player,
    pub monster: Option<Monster>,
    pub rules: Rules,
    outcome: Option<Outcome>,
    pending: Option<Prompt>,
    rng: R,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        prompt: &'static str,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from map text and the class selection ("1" or "2").
        #[wasm_bindgen(constructor)]
        pub fn new(map_text: &str, class_choice: &str, seed: u64) -> Result<WasmGame, JsValue> {
            let mut rng = StdRng::seed_from_u64(seed);
            let map = load_map_from_str(map_text, &mut rng)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let class = PlayerClass::from_selection(class_choice);
            Ok(WasmGame {
                state: GameState::with_rng(map, class, Rules::default(), rng),
            })
        }

        /// Return the opening render.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            let out = self.state.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                prompt: self.state.prompt(),
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.state.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                prompt: self.state.prompt(),
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState<StdRng> {
    /// Start a game with an entropy-seeded generator and standard rules.
    pub fn new(map: Map, class: PlayerClass) -> Self {
        GameState::with_rng(map, class, Rules::default(), StdRng::from_entropy())
    }

    pub fn seeded(map: Map, class: PlayerClass, rules: Rules, seed: u64) -> Self {
        GameState::with_rng(map, class, rules, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(mut map: Map, class: PlayerClass, rules: Rules, rng: R) -> Self {
        let entrance = map.entrance;

        // Programmers always find a keyboard at the entrance.
        if class == PlayerClass::Programmer {
            if let Some(room) = map.room_mut(entrance) {
                room.has_primary_weapon = true;
            }
        }

        info!("new game as {} in room {}", class.name(), entrance);
        GameState {
            map,
            player: Player::new(class, entrance),
            monster: None,
            rules,
            outcome: None,
            pending: None,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.monster.is_some() {
            Mode::Battling
        } else {
            Mode::Exploring
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Mark the game finished. The first outcome recorded wins.
    pub fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            info!("game over: {:?}", outcome);
            self.outcome = Some(outcome);
            self.pending = None;
        }
    }

    /// True while a forced choice (the exit guardians) is waiting for input.
    pub fn awaiting_choice(&self) -> bool {
        self.pending.is_some()
    }

    pub fn prompt(&self) -> &'static str {
        match self.pending {
            Some(Prompt::ExitNegotiation) => "Your action? ",
            None => "Command? ",
        }
    }

    /// The opening render: the entrance room.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        out.separator();
        render_room(
            &mut out,
            &self.map,
            &self.player,
            self.mode() == Mode::Battling,
        );
        out
    }

    /// Process a single player input; returns (output, game over?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        if self.is_over() {
            out.say("The game is over.");
            return (out, true);
        }

        match self.pending {
            Some(Prompt::ExitNegotiation) => self.choose_exit_option(&mut out, input),
            None => engine::dispatch(self, &mut out, input),
        }

        (out, self.is_over())
    }

    /// Roll for a monster; on success the session switches to battle.
    pub(crate) fn roll_encounter(&mut self, chance: f64) -> bool {
        self.monster = Monster::generate_randomly(chance, &mut self.rng);
        let spawned = self.monster.is_some();
        debug!("encounter roll at {:.0}%: {}", chance, spawned);
        spawned
    }

    pub(crate) fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub(crate) fn open_prompt(&mut self, prompt: Prompt) {
        self.pending = Some(prompt);
    }

    pub(crate) fn close_prompt(&mut self) {
        self.pending = None;
    }
}
