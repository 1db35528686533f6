use std::error::Error;

use env_logger::{Builder, Env};
use promptio::cli::{BoundsArg, InputArg};
use promptio::console::{self, exit_on_closed};
use promptio::{DynReader, StdoutOutput};
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  promptio_read --bounds <LO..HI> [--input <token>] [--prompt <text>]");
    eprintln!();
    eprintln!("Bounds:");
    eprintln!("  LO..HI | LO..=HI | LO,HI   Inclusive range the value must fall into");
    eprintln!();
    eprintln!("Input tokens:");
    eprintln!("  - | stdin          Read from stdin (default)");
    eprintln!("  <path>             Read scripted input from a file");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let bounds_ref = reader.add::<BoundsArg>(tag::both('b', "bounds"));
    let input_ref = reader.add::<InputArg>(tag::both('i', "input"));
    let prompt_ref = reader.add::<String>(tag::both('p', "prompt"));

    let args = reader.parse()?;

    let bounds = match bounds_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(e)) => return Err(e.into()),
        None => return Err("missing --bounds".into()),
    };

    let input = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("InputArg parsing is infallible"),
        None => InputArg::stdin(),
    };

    let prompt = prompt_ref.get(&args).and_then(Result::ok);

    if input.is_stdin() && prompt.is_none() {
        let value = console::read_bounded_int(bounds.lower, bounds.upper);
        println!("{value}");
        return Ok(());
    }

    let provider = input.provider();
    let mut prompter = DynReader::from_providers(provider.as_ref(), &StdoutOutput::new())?;

    let result = match prompt {
        Some(text) => prompter.prompt_bounded_int(&text, bounds.lower, bounds.upper),
        None => prompter.read_bounded_int(bounds.lower, bounds.upper),
    };
    let value = exit_on_closed(result);

    println!("{value}");
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("promptio_read error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
