#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]
use std::io;

use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use racing::{logging, RandomNumbers, Settings};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let settings = Settings::from_env()?;
    let rng = match settings.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded draws");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut numbers = RandomNumbers::new(rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    racing::run(stdin.lock(), stdout.lock(), &mut numbers)?;
    Ok(())
}
