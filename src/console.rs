//! Prompting loops over an injected line reader and writer.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::NonZeroU32;

use crate::car::Car;
use crate::error::{InputError, RaceError};
use crate::input;

pub const NAMES_PROMPT: &str = "경주할 자동차 이름을 입력하세요.(이름은 쉼표(,) 기준으로 구분)";
pub const ROUNDS_PROMPT: &str = "시도할 횟수는 몇 회인가요?";

pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prompts until a valid comma separated list of names arrives.
    pub fn read_cars(&mut self) -> Result<Vec<Car>, RaceError> {
        loop {
            writeln!(self.writer, "{NAMES_PROMPT}")?;
            let line = self.read_raw_line("car names")?;
            match input::parse_names(&line) {
                Ok(names) => {
                    tracing::info!(?names, "roster accepted");
                    return Ok(names.into_iter().map(Car::new).collect());
                }
                Err(err) => self.reject(&line, err)?,
            }
        }
    }

    /// Prompts until a token parses as a round count of at least one.
    pub fn read_round_count(&mut self) -> Result<NonZeroU32, RaceError> {
        loop {
            writeln!(self.writer, "{ROUNDS_PROMPT}")?;
            let token = self.next_token("round count")?;
            match input::parse_round_count(&token) {
                Ok(count) => {
                    tracing::info!(count = count.get(), "round count accepted");
                    return Ok(count);
                }
                Err(err) => self.reject(&token, err)?,
            }
        }
    }

    fn reject(&mut self, raw: &str, err: InputError) -> Result<(), RaceError> {
        tracing::debug!(input = raw, ?err, "input rejected");
        writeln!(self.writer, "{err}")?;
        Ok(())
    }

    fn next_token(&mut self, waiting_for: &'static str) -> Result<String, RaceError> {
        while self.pending.is_empty() {
            let line = self.read_raw_line(waiting_for)?;
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    fn read_raw_line(&mut self, waiting_for: &'static str) -> Result<String, RaceError> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RaceError::InputClosed(waiting_for));
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn reads_cars_from_first_valid_line() {
        let mut console = scripted("pobi,woni,jun\n");
        let cars = console.read_cars().unwrap();

        let names: Vec<&str> = cars.iter().map(Car::name).collect();
        assert_eq!(names, vec!["pobi", "woni", "jun"]);
        assert!(cars.iter().all(|car| car.position() == 0));
        assert_eq!(transcript(console), format!("{NAMES_PROMPT}\n"));
    }

    #[test]
    fn reprompts_until_names_are_valid() {
        let mut console = scripted("a,a\nabcdef\n,\n\npobi,crong\n");
        let cars = console.read_cars().unwrap();
        assert_eq!(cars.len(), 2);

        let expected = format!(
            "{NAMES_PROMPT}\n{}\n{NAMES_PROMPT}\n{}\n{NAMES_PROMPT}\n{}\n{NAMES_PROMPT}\n{}\n{NAMES_PROMPT}\n",
            InputError::DuplicateName,
            InputError::NameTooLong,
            InputError::EmptyNameList,
            InputError::BlankName,
        );
        assert_eq!(transcript(console), expected);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let mut console = scripted("pobi,woni\r\n");
        let cars = console.read_cars().unwrap();
        assert_eq!(cars[1].name(), "woni");
    }

    #[test]
    fn reprompts_until_count_is_valid() {
        let mut console = scripted("abc\n0\n3\n");
        assert_eq!(console.read_round_count().unwrap().get(), 3);

        let expected = format!(
            "{ROUNDS_PROMPT}\n{}\n{ROUNDS_PROMPT}\n{}\n{ROUNDS_PROMPT}\n",
            InputError::NotANumber,
            InputError::CountTooSmall,
        );
        assert_eq!(transcript(console), expected);
    }

    #[test]
    fn bad_token_is_discarded_but_rest_of_line_is_kept() {
        let mut console = scripted("abc 2\n");
        assert_eq!(console.read_round_count().unwrap().get(), 2);

        let out = transcript(console);
        assert_eq!(out.matches(ROUNDS_PROMPT).count(), 2);
    }

    #[test]
    fn blank_lines_are_skipped_for_count() {
        let mut console = scripted("\n   \n4\n");
        assert_eq!(console.read_round_count().unwrap().get(), 4);
    }

    #[test]
    fn rejected_input_stays_quiet_at_default_level() {
        let log = SharedLog::default();
        let sink = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || sink.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut console = scripted("a,a\npobi\n0\n1\n");
            console.read_cars().unwrap();
            console.read_round_count().unwrap();
        });

        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn closed_input_is_fatal() {
        let mut names = scripted("a,a\n");
        assert!(matches!(
            names.read_cars(),
            Err(RaceError::InputClosed("car names"))
        ));

        let mut rounds = scripted("zero\n");
        assert!(matches!(
            rounds.read_round_count(),
            Err(RaceError::InputClosed("round count"))
        ));
    }
}
