//! Validation of raw user input into car names and a round count.

use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::error::InputError;

pub const MAX_NAME_LENGTH: usize = 5;
pub const MIN_ROUNDS: i32 = 1;

/// Splits a line on `,` and trims every token.
///
/// A line without a comma is a single token, and trailing empty tokens are
/// dropped, so `","` gives no tokens while `""` gives one blank token.
pub fn split_names(line: &str) -> Vec<String> {
    let mut raw: Vec<&str> = line.split(',').collect();
    if raw.len() > 1 {
        while raw.last().is_some_and(|token| token.is_empty()) {
            raw.pop();
        }
    }
    raw.into_iter().map(|token| token.trim().to_string()).collect()
}

/// Checks trimmed names in order: empty list, duplicates, then each name for
/// blankness and length.
pub fn validate_names(names: &[String]) -> Result<(), InputError> {
    if names.is_empty() {
        return Err(InputError::EmptyNameList);
    }

    let unique: HashSet<&str> = names.iter().map(String::as_str).collect();
    if unique.len() != names.len() {
        return Err(InputError::DuplicateName);
    }

    for name in names {
        if name.is_empty() {
            return Err(InputError::BlankName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(InputError::NameTooLong);
        }
    }
    Ok(())
}

pub fn parse_names(line: &str) -> Result<Vec<String>, InputError> {
    let names = split_names(line);
    validate_names(&names)?;
    Ok(names)
}

pub fn parse_round_count(token: &str) -> Result<NonZeroU32, InputError> {
    let count: i32 = token.parse().map_err(|_| InputError::NotANumber)?;
    if count < MIN_ROUNDS {
        return Err(InputError::CountTooSmall);
    }
    u32::try_from(count)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(InputError::CountTooSmall)
}
