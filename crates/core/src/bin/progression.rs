//! Generate a chord progression from the command line

use chord_trainer_core::{ChordFamily, Difficulty, FamilySelection, Key, ProgressionRequest, Training};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage(args.first().map_or("progression", String::as_str));
        std::process::exit(1);
    }

    let key: Key = args[1].parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let training = parse_training(&args[2]).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let mut num_chords = 8;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires an integer");
                    std::process::exit(1);
                }));
            }
            "--json" => json = true,
            other => {
                num_chords = other.parse().unwrap_or_else(|_| {
                    eprintln!("Unexpected argument: {}", other);
                    std::process::exit(1);
                });
            }
        }
        i += 1;
    }

    let request = ProgressionRequest::new(key, num_chords, training);
    let result = match seed {
        Some(seed) => request.generate(&mut StdRng::seed_from_u64(seed)),
        None => request.generate(&mut rand::rng()),
    };

    match result {
        Ok(progression) if json => match serde_json::to_string_pretty(&progression) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize progression: {}", e);
                std::process::exit(1);
            }
        },
        Ok(progression) => println!("{}", progression.display()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn parse_training(arg: &str) -> chord_trainer_core::Result<Training> {
    if let Ok(difficulty) = arg.parse::<Difficulty>() {
        return Ok(Training::Difficulty(difficulty));
    }

    let families = arg
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<ChordFamily>)
        .collect::<chord_trainer_core::Result<Vec<_>>>()?;
    Ok(Training::Families(FamilySelection::new(families)?))
}

fn print_usage(program: &str) {
    println!("Usage: {} <key> <difficulty|families> [num_chords] [--seed N] [--json]", program);
    println!();
    println!("  key          C, G, D, A, E, F or B");
    println!("  difficulty   Beginner, Intermediate or Expert");
    println!("  families     comma-separated: power, seventh, extended, dim_aug");
    println!();
    println!("Examples:");
    println!("  {} C Beginner 4", program);
    println!("  {} G power,dim_aug 8 --seed 42", program);
}
