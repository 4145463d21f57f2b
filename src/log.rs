use serde::Serialize;

use crate::car::Car;

/// Snapshot of the roster after one rendered round.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundLog {
    pub round: u32,
    pub max_distance: u32,
    pub cars: Vec<Car>,
}

impl RoundLog {
    pub fn new(round: u32, max_distance: u32, cars: &[Car]) -> Self {
        Self {
            round,
            max_distance,
            cars: cars.to_vec(),
        }
    }
}
