use std::fmt;
use std::io::Write;
use std::num::NonZeroU32;

use crate::car::Car;
use crate::error::RaceError;
use crate::log::RoundLog;
use crate::random::NumberGenerator;

/// Starting value of the running maximum. A car has to reach at least this
/// far to be able to win.
pub const INITIAL_MAX_DISTANCE: u32 = 1;

pub const RESULT_HEADER: &str = "실행 결과";

#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    state: State,
    round_count: NonZeroU32,
    cars: Vec<Car>,
    max_distance: u32,
    logs: Vec<RoundLog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Ready,
    Racing(u32),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winners(Vec<String>),
    NoWinner,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winners(names) => write!(f, "최종 우승자: {}", names.join(", ")),
            Self::NoWinner => write!(f, "모든 차량이 이동하지 않아서 우승자가 없습니다."),
        }
    }
}

impl Race {
    /// `cars` must come from validated input.
    pub const fn new(cars: Vec<Car>, round_count: NonZeroU32) -> Self {
        Self {
            state: State::Ready,
            round_count,
            cars,
            max_distance: INITIAL_MAX_DISTANCE,
            logs: Vec::new(),
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub const fn round_count(&self) -> u32 {
        self.round_count.get()
    }

    pub const fn max_distance(&self) -> u32 {
        self.max_distance
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub fn logs(&self) -> &[RoundLog] {
        &self.logs
    }

    /// Runs every round, then announces the result.
    ///
    /// # Panics
    ///
    /// Panics if the race has already been run.
    pub fn race<N, W>(&mut self, numbers: &mut N, out: &mut W) -> Result<Outcome, RaceError>
    where
        N: NumberGenerator + ?Sized,
        W: Write,
    {
        assert!(self.state == State::Ready, "Race already run");

        writeln!(out, "{RESULT_HEADER}")?;
        for round in 1..=self.round_count.get() {
            self.state = State::Racing(round);
            self.play_round(numbers);
            self.render_round(out)?;
        }
        self.state = State::Finished;

        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(logs = %serde_json::to_string(&self.logs)?, "race log");
        }

        let outcome = self.winners();
        tracing::info!(?outcome, max_distance = self.max_distance, "race finished");
        writeln!(out, "{outcome}")?;
        out.flush()?;
        Ok(outcome)
    }

    fn play_round<N: NumberGenerator + ?Sized>(&mut self, numbers: &mut N) {
        for car in &mut self.cars {
            car.advance(numbers);
        }
    }

    fn render_round<W: Write>(&mut self, out: &mut W) -> Result<(), RaceError> {
        for car in &self.cars {
            if car.position() > self.max_distance {
                self.max_distance = car.position();
            }
            writeln!(out, "{}", car.track())?;
        }
        writeln!(out)?;

        let round = match self.state {
            State::Racing(round) => round,
            State::Ready | State::Finished => 0,
        };
        self.logs.push(RoundLog::new(round, self.max_distance, &self.cars));
        Ok(())
    }

    /// Cars sitting at the running maximum, in roster order.
    pub fn winners(&self) -> Outcome {
        let names: Vec<String> = self
            .cars
            .iter()
            .filter(|car| car.position() == self.max_distance)
            .map(|car| car.name().to_string())
            .collect();

        if names.is_empty() {
            Outcome::NoWinner
        } else {
            Outcome::Winners(names)
        }
    }
}
