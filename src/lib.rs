#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]
//! Turn based text car race.
//!
//! Names and a round count are read from a line reader, every car then
//! draws once per round and moves on a high enough draw, and the cars tied
//! for the furthest distance win.

pub mod car;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod input;
pub mod log;
pub mod logging;
pub mod random;

use std::io::{BufRead, Write};

pub use car::Car;
pub use config::Settings;
pub use console::Console;
pub use error::{InputError, RaceError};
pub use game::{Outcome, Race, State};
pub use random::{FixedNumbers, NumberGenerator, RandomNumbers};

/// Plays one full game: roster, round count, every round, then the winner
/// line. Returns the finished race.
pub fn run<R, W, N>(input: R, output: W, numbers: &mut N) -> Result<Race, RaceError>
where
    R: BufRead,
    W: Write,
    N: NumberGenerator + ?Sized,
{
    let mut console = Console::new(input, output);

    let cars = console.read_cars()?;
    let round_count = console.read_round_count()?;

    let mut race = Race::new(cars, round_count);
    tracing::info!(
        cars = race.cars().len(),
        round_count = race.round_count(),
        "race starting"
    );
    race.race(numbers, console.writer())?;
    Ok(race)
}
