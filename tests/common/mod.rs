#![allow(dead_code)]

use std::collections::VecDeque;

use door_crawl::engine::{PlayerClass, Rules};
use door_crawl::{GameState, load_map_from_str};
use rand::RngCore;
use rand::rngs::mock::StepRng;

/// Room 1 links to 2 and 3; room 3 is the exit.
pub const THREE_ROOMS: &str = "3
1
@description
The entrance.
@connect
2,3
@items
currency
2
@description
A side room.
@connect
1
3
@description
The exit hall.
@connect
1
";

/// A generator that replays a fixed list of `[0, 1)` draws, then yields zeros.
///
/// Each fraction is encoded so that `rng.gen::<f64>()` returns it exactly
/// (for fractions with at most 53 significant bits).
pub struct Scripted {
    draws: VecDeque<u64>,
}

impl Scripted {
    pub fn new(fractions: &[f64]) -> Self {
        let draws = fractions
            .iter()
            .map(|f| {
                assert!((0.0..1.0).contains(f), "draw {f} outside [0, 1)");
                ((f * (1u64 << 53) as f64) as u64) << 11
            })
            .collect();
        Scripted { draws }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws.pop_front().unwrap_or(0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn scripted_game(class: PlayerClass, draws: &[f64]) -> GameState<Scripted> {
    let map = load_map_from_str(THREE_ROOMS, &mut StepRng::new(0, 0)).expect("test map parses");
    GameState::with_rng(map, class, Rules::default(), Scripted::new(draws))
}
