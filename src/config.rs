use crate::error::RaceError;

pub const SEED_VAR: &str = "RACING_SEED";

/// Runtime settings taken from the environment. The game rules themselves
/// are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Seed for the draw generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Result<Self, RaceError> {
        Self::from_seed_var(std::env::var(SEED_VAR).ok().as_deref())
    }

    fn from_seed_var(raw: Option<&str>) -> Result<Self, RaceError> {
        let seed = match raw.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(
                value
                    .parse()
                    .map_err(|_| RaceError::InvalidSeed(value.to_string()))?,
            ),
        };
        Ok(Self { seed })
    }
}
