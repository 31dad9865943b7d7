mod common;

use std::io::Write;
use std::path::Path;

use door_crawl::engine::{Combatant, PLAYER_MAX_HEALTH, PlayerClass, Rules};
use door_crawl::{GameState, Mode, MapError, load_map_from_file};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INPUTS: [&str; 16] = [
    "open 1", "open 2", "open 3", "open 4", "open 5", "open 6", "open 7", "open 8",
    "pickup silver", "pickup sword", "pickup keyboard", "search", "rest", "attack", "run", "ignore",
];

fn shipped_map_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("maps/custommap.txt")
}

#[test]
fn shipped_map_loads() {
    let map = load_map_from_file(&shipped_map_path(), &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(map.room_count(), 8);
    assert_eq!(map.entrance, 1);
    assert_eq!(map.exit, 8);
    for room in &map.rooms {
        assert!(room.currency == 0 || (150..=449).contains(&room.currency));
    }
}

#[test]
fn map_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", common::THREE_ROOMS).unwrap();
    let map = load_map_from_file(file.path(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(map.exit, 3);
    assert!(map.is_adjacent(3, 1));

    let err = load_map_from_file(Path::new("/definitely/missing.txt"), &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}

/// Drive many seeded games with random input and check the state invariants
/// after every step.
#[test]
fn random_play_keeps_state_consistent() {
    for seed in 0..40u64 {
        let mut inputs = StdRng::seed_from_u64(seed ^ 0xD00D);
        let mut rng = StdRng::seed_from_u64(seed);
        let map = load_map_from_file(&shipped_map_path(), &mut rng).unwrap();
        let class = PlayerClass::ALL[(seed % 2) as usize];
        let mut game = GameState::with_rng(map, class, Rules::default(), rng);

        for _ in 0..400 {
            let input = INPUTS[inputs.gen_range(0..INPUTS.len())];
            let room_before = game.player.room;
            let silver_before = game.player.currency;
            let (_, over) = game.step(input);

            if game.awaiting_choice() {
                let (_, done) = game.step("3");
                assert!(!done);
            }

            let health = game.player.health();
            assert!((0.0..=PLAYER_MAX_HEALTH).contains(&health));
            assert!(game.map.room(game.player.room).is_some());
            assert!(game.player.currency >= silver_before);
            if let Some(m) = &game.monster {
                assert!(m.health() > 0.0 && m.health() <= m.full_health());
                assert_eq!(game.mode(), Mode::Battling);
            } else {
                assert_eq!(game.mode(), Mode::Exploring);
            }
            if game.player.room != room_before {
                let fled_or_moved = game.map.is_adjacent(room_before, game.player.room);
                assert!(fled_or_moved, "jumped {} -> {}", room_before, game.player.room);
            }

            if over {
                assert!(game.is_over());
                break;
            }
        }
    }
}
