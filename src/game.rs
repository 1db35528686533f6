//! The hi-lo number-guessing game.
//!
//! Every guess and every menu answer goes through a [`BoundedIntegerReader`],
//! so malformed entries are re-asked instead of being counted as guesses.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::config::{GameConfig, MAX_TRIES};
use crate::reader::{BoundedIntegerReader, ReadResult};

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guessed on attempt `guesses`.
    Won { guesses: u32 },
    Lost { secret: i32 },
}

/// Answer to the play-again menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Play,
    Quit,
    Configure,
}

impl Choice {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'y' => Some(Choice::Play),
            'n' => Some(Choice::Quit),
            'c' => Some(Choice::Configure),
            _ => None,
        }
    }
}

/// Totals over a whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rounds: u32,
    pub wins: u32,
}

/// Play one round against a known `secret`.
pub fn play_round<R: BufRead, W: Write>(
    reader: &mut BoundedIntegerReader<R, W>,
    config: &GameConfig,
    secret: i32,
) -> ReadResult<Outcome> {
    config.validate()?;

    reader.say(format_args!(
        "Let's play a game. I'm thinking of a number between {} and {}. You have {} tries to guess what it is.",
        config.lower, config.upper, config.tries
    ))?;

    for attempt in 1..=config.tries {
        reader.say(format_args!("Guess #{attempt}: "))?;
        let guess = reader.read_bounded_int(config.lower, config.upper)?;

        if guess < secret {
            reader.say(format_args!("Your guess is too low."))?;
        } else if guess > secret {
            reader.say(format_args!("Your guess is too high."))?;
        } else {
            reader.say(format_args!("Correct ! You win !"))?;
            return Ok(Outcome::Won { guesses: attempt });
        }
    }

    reader.say(format_args!("Sorry, you lose. The correct number was {secret}"))?;
    Ok(Outcome::Lost { secret })
}

/// Ask for new parameters, one bounded read each.
pub fn configure<R: BufRead, W: Write>(
    reader: &mut BoundedIntegerReader<R, W>,
) -> ReadResult<GameConfig> {
    let tries = reader.prompt_bounded_int("Number of guesses: ", 1, MAX_TRIES)?;
    let lower = reader.prompt_bounded_int("Lower bound: ", i32::MIN, i32::MAX)?;
    let upper = reader.prompt_bounded_int("Upper bound: ", lower, i32::MAX)?;
    Ok(GameConfig::new(tries, lower, upper)?)
}

/// Show the play-again menu until a known answer is given.
pub fn ask_choice<R: BufRead, W: Write>(
    reader: &mut BoundedIntegerReader<R, W>,
) -> ReadResult<Choice> {
    loop {
        reader.say(format_args!("Would you like to play again (y/n) or change parameters(c)?"))?;
        let c = reader.read_char()?;
        match Choice::from_char(c) {
            Some(choice) => return Ok(choice),
            None => log::debug!("unknown menu answer {c:?}"),
        }
    }
}

/// Run rounds until the player quits. The first round starts immediately.
///
/// Ends with `ReadError::StreamClosed` if the input runs out mid-session, and
/// with `ReadError::Config` before anything is read if `config` is invalid.
pub fn run<R: BufRead, W: Write, G: Rng>(
    reader: &mut BoundedIntegerReader<R, W>,
    mut config: GameConfig,
    rng: &mut G,
) -> ReadResult<Summary> {
    config.validate()?;

    let mut summary = Summary::default();
    let mut choice = Choice::Play;

    loop {
        match choice {
            Choice::Play => {
                let secret = rng.gen_range(config.lower..=config.upper);
                log::debug!("round {} secret {secret}", summary.rounds + 1);
                let outcome = play_round(reader, &config, secret)?;
                summary.rounds += 1;
                if matches!(outcome, Outcome::Won { .. }) {
                    summary.wins += 1;
                }
            }
            Choice::Configure => {
                config = configure(reader)?;
                log::info!("game reconfigured: {config:?}");
            }
            Choice::Quit => break,
        }
        choice = ask_choice(reader)?;
    }

    reader.say(format_args!("Thank you for playing"))?;
    Ok(summary)
}
