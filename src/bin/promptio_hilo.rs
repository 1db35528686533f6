use std::error::Error;

use env_logger::{Builder, Env};
use promptio::cli::InputArg;
use promptio::config::{GameConfig, load_config};
use promptio::console::exit_on_closed;
use promptio::{DynReader, StdoutOutput, game};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  promptio_hilo [--config <path>] [--input <token>] [--seed <n>]");
    eprintln!();
    eprintln!("  --config <path>    Game parameters (.json, .yaml, .yml or .toml)");
    eprintln!("  --input <token>    - | stdin, or a file with scripted answers");
    eprintln!("  --seed <n>         Seed for the secret number generator");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let input_ref = reader.add::<InputArg>(tag::both('i', "input"));
    let seed_ref = reader.add::<u64>(tag::both('s', "seed"));

    let args = reader.parse()?;

    let config = match config_ref.get(&args).and_then(Result::ok) {
        Some(path) => load_config(&path)?,
        None => GameConfig::default(),
    };

    let input = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("InputArg parsing is infallible"),
        None => InputArg::stdin(),
    };

    let mut rng = match seed_ref.get(&args) {
        Some(Ok(seed)) => StdRng::seed_from_u64(seed),
        Some(Err(e)) => return Err(format!("invalid --seed: {e:?}").into()),
        None => StdRng::from_entropy(),
    };

    let provider = input.provider();
    let mut prompter = DynReader::from_providers(provider.as_ref(), &StdoutOutput::new())?;

    let summary = exit_on_closed(game::run(&mut prompter, config, &mut rng));
    log::info!("played {} round(s), won {}", summary.rounds, summary.wins);
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("promptio_hilo error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
