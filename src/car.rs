use serde::Serialize;

use crate::random::NumberGenerator;

/// Every draw lands in this range.
pub const DRAW_RANGE: std::ops::RangeInclusive<u32> = 0..=9;
/// Draws at or above this value move the car one step.
pub const MOVE_THRESHOLD: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    name: String,
    position: u32,
}

impl Car {
    pub const fn new(name: String) -> Self {
        Self { name, position: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Draws once from `numbers` and moves forward on a draw of
    /// [`MOVE_THRESHOLD`] or more. Returns whether the car moved.
    pub fn advance<N: NumberGenerator + ?Sized>(&mut self, numbers: &mut N) -> bool {
        let draw = numbers.pick_in_range(DRAW_RANGE);
        let moved = draw >= MOVE_THRESHOLD;
        if moved {
            self.position += 1;
        }
        tracing::trace!(car = %self.name, draw, moved, "advance");
        moved
    }

    pub fn track(&self) -> String {
        format!("{} : {}", self.name, "-".repeat(self.position as usize))
    }
}
