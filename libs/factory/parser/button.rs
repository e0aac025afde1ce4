//! Button wiring: `(0,2,3)`

use std::num::ParseIntError;

use thiserror::Error;
use toggle_solver::{Bitmask, Button};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ButtonError {
    #[error("expected format '(<number>(,<number>)*)', got '{0}'")]
    WrongFormat(String),

    #[error("could not parse '{0}' as a light index")]
    NotANumber(String, #[source] ParseIntError),

    #[error("button toggles light {index}, but only {lights} lights exist")]
    IndexOutOfRange { index: usize, lights: usize },

    #[error("button toggles light {0} twice")]
    FlippedTwice(usize),
}

/// Parse a button for a machine with `lights` lights.
pub fn parse_button(input: &str, lights: usize) -> Result<Button, ButtonError> {
    let inner = input
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| ButtonError::WrongFormat(input.to_string()))?;

    let mut mask = Bitmask::ZERO;
    for value in inner.split(',') {
        let index: usize = value
            .parse()
            .map_err(|e| ButtonError::NotANumber(value.to_string(), e))?;
        if index >= lights {
            return Err(ButtonError::IndexOutOfRange { index, lights });
        }
        if mask.contains(index) {
            return Err(ButtonError::FlippedTwice(index));
        }
        mask = mask
            .with_bit(index)
            .ok_or(ButtonError::IndexOutOfRange { index, lights })?;
    }

    Ok(Button::new(mask))
}
