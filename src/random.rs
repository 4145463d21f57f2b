use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::Rng;

/// Source of the per-car draws.
pub trait NumberGenerator {
    fn pick_in_range(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform draws from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomNumbers<R> {
    rng: R,
}

impl<R: Rng> RandomNumbers<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberGenerator for RandomNumbers<R> {
    fn pick_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Replays a fixed sequence, starting over once it runs out. The range is
/// ignored so callers can script exact outcomes.
#[derive(Debug, Clone)]
pub struct FixedNumbers {
    values: VecDeque<u32>,
}

impl FixedNumbers {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: VecDeque<u32> = values.into_iter().collect();
        assert!(!values.is_empty(), "FixedNumbers needs at least one value");
        Self { values }
    }
}

impl NumberGenerator for FixedNumbers {
    fn pick_in_range(&mut self, _range: RangeInclusive<u32>) -> u32 {
        // non-empty by construction
        let value = self.values.pop_front().unwrap_or_default();
        self.values.push_back(value);
        value
    }
}
