use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use door_crawl::config::Settings;
use door_crawl::engine::{Output, OutputBlock, PlayerClass};
use door_crawl::{GameState, Outcome, load_map_from_file};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEPARATOR: &str = "-------------------------------------------------------------";

fn flush_output(out: Output) {
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Separator => {
                println!("{}", SEPARATOR);
                started_events = false;
            }
            OutputBlock::Title(t) => println!("{}", t),
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Event(ev) => {
                if !started_events {
                    println!(); // visual separation before first event
                    started_events = true;
                }
                println!("{}", ev);
            }
        }
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

/// Read one trimmed line; `None` on end of input.
fn read_line(stdin: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if stdin.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn main() -> io::Result<()> {
    init_logging();

    let settings = match Settings::discover() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    let map_path: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.map_path.clone());

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let map = match load_map_from_file(&map_path, &mut rng) {
        Ok(m) => {
            println!(
                "Initialising game map -- number of rooms: {}",
                m.room_count()
            );
            m
        }
        Err(e) => {
            eprintln!("Unable to load map file '{}': {e}", map_path.display());
            std::process::exit(1);
        }
    };

    let mut stdin = io::stdin().lock();

    println!("{}", SEPARATOR);
    println!("Select a class:");
    for (i, class) in PlayerClass::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, class.name());
    }
    let Some(choice) = read_line(&mut stdin, "Your choice? ")? else {
        println!("\nGoodbye.");
        return Ok(());
    };
    let class = PlayerClass::from_selection(&choice);
    println!("Now you are a {}!", class.name());

    let mut state = GameState::with_rng(map, class, settings.rules.clone(), rng);
    flush_output(state.initialize());

    loop {
        let Some(input) = read_line(&mut stdin, state.prompt())? else {
            println!("\nGoodbye.");
            state.end_game(Outcome::Quit);
            break;
        };

        if input.is_empty() && !state.awaiting_choice() {
            continue;
        }

        let (out, over) = state.step(&input);
        flush_output(out);

        if over {
            break;
        }
    }

    Ok(())
}
