// Standalone replay tool for checking logged decisions
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --validate             Check logged moves against expected ones
//   --verbose              Show detailed output for each turn

use std::env;
use std::process;

use greedy_snake::replay::{parse_direction, ReplayEngine, ReplayResult};
use greedy_snake::types::Direction;

fn print_usage() {
    eprintln!("Battlesnake Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --validate <T:M,...>    Validate expected moves (format: turn:move|move,...)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay battlesnake_debug.jsonl --all");
    eprintln!("  replay battlesnake_debug.jsonl --turns 5,10,15");
    eprintln!("  replay battlesnake_debug.jsonl --validate 5:up,10:right|down");
}

enum Mode {
    All,
    Turns(String),
    Validate(String),
}

fn parse_turns(s: &str) -> Result<Vec<i32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn parse_expected_moves(s: &str) -> Result<Vec<(i32, Vec<Direction>)>, String> {
    s.split(',')
        .map(|pair| {
            let parts: Vec<&str> = pair.trim().split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid format '{}'. Expected 'turn:move'", pair));
            }

            let turn = parts[0]
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;

            // Multiple acceptable moves are separated by '|'
            let moves = parts[1]
                .split('|')
                .map(|m| parse_direction(m.trim()))
                .collect::<Result<Vec<Direction>, String>>()?;

            Ok((turn, moves))
        })
        .collect()
}

fn fail(message: String) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn finish(engine: &ReplayEngine, results: &[ReplayResult]) {
    engine.print_report(results);
    if results.iter().any(|r| !r.matches) {
        process::exit(2);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(if args.iter().any(|a| a == "--help") { 0 } else { 1 });
    }

    let log_file = &args[1];
    let mut verbose = false;
    let mut mode = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => mode = Some(Mode::All),
            "--turns" | "--validate" => {
                let value = match args.get(i + 1) {
                    Some(v) => v.clone(),
                    None => fail(format!("{} requires an argument", args[i])),
                };
                mode = Some(if args[i] == "--turns" {
                    Mode::Turns(value)
                } else {
                    Mode::Validate(value)
                });
                i += 1;
            }
            "--verbose" => verbose = true,
            other => {
                print_usage();
                fail(format!("Unknown option '{}'", other))
            }
        }
        i += 1;
    }

    let mode = match mode {
        Some(m) => m,
        None => {
            print_usage();
            fail("Must specify --all, --turns, or --validate".to_string())
        }
    };

    println!("Replay log file: {}", log_file);

    let engine = ReplayEngine::new(verbose);
    let entries = engine
        .load_log_file(log_file)
        .unwrap_or_else(|e| fail(format!("loading log file: {}", e)));

    if entries.is_empty() {
        fail("Log file is empty".to_string());
    }

    println!("Loaded {} log entries\n", entries.len());

    match mode {
        Mode::All => {
            let results = engine.replay_all(&entries);
            finish(&engine, &results);
        }
        Mode::Turns(arg) => {
            let turns = parse_turns(&arg).unwrap_or_else(|e| fail(e));
            let results = engine
                .replay_turns(&entries, &turns)
                .unwrap_or_else(|e| fail(e));
            finish(&engine, &results);
        }
        Mode::Validate(arg) => {
            let expected = parse_expected_moves(&arg).unwrap_or_else(|e| fail(e));
            match engine.validate_expected_moves(&entries, &expected) {
                Ok(()) => println!("✓ All expected moves validated successfully!"),
                Err(e) => {
                    eprintln!("✗ Validation failed: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
