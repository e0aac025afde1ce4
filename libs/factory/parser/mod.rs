//! Machine description parser
//!
//! One machine per line:
//!
//! ```text
//! [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
//! ```
//!
//! The bracketed diagram maps character `i` to light `i` (`#` on, `.` off).
//! Each parenthesised group is a button listing the lights it toggles. The
//! optional braced joltage block is checked for shape and then dropped.

mod button;
mod diagram;

use thiserror::Error;
use toggle_solver::{Button, Machine};

pub use button::{parse_button, ButtonError};
pub use diagram::parse_diagram;

/// Errors for a single machine line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing light diagram")]
    MissingDiagram,

    #[error("expected light diagram '[(.|#)+]', got '{0}'")]
    Diagram(String),

    #[error("can only handle {max} lights, but found {found}")]
    TooManyLights { found: usize, max: usize },

    #[error("could not parse button #{index}")]
    Button {
        index: usize,
        #[source]
        source: ButtonError,
    },

    #[error("expected joltage block '{{<number>(,<number>)*}}', got '{0}'")]
    Joltage(String),

    #[error("joltage block lists {found} values for {lights} lights")]
    JoltageCount { found: usize, lights: usize },

    #[error("unexpected '{0}' in machine description")]
    UnexpectedToken(String),
}

/// Error for a whole input file, tagged with the 1-based line number
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct InputError {
    pub line: usize,
    #[source]
    pub source: ParseError,
}

/// A machine together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMachine {
    /// 1-based line number in the input
    pub line: usize,
    /// Number of lights in the diagram
    pub lights: usize,
    pub machine: Machine,
}

/// Parse one machine description.
///
/// A standalone description counts as line 1; [`parse_input`] stamps the
/// real line number.
pub fn parse_machine(input: &str) -> Result<ParsedMachine, ParseError> {
    let mut tokens = input.split_whitespace();

    let (lights, target) = tokens
        .next()
        .ok_or(ParseError::MissingDiagram)
        .and_then(parse_diagram)?;

    let mut buttons: Vec<Button> = Vec::new();
    let mut joltage_seen = false;

    for token in tokens {
        if joltage_seen {
            return Err(ParseError::UnexpectedToken(token.to_string()));
        }
        match token.as_bytes().first() {
            Some(b'(') => {
                let button = parse_button(token, lights).map_err(|source| ParseError::Button {
                    index: buttons.len(),
                    source,
                })?;
                buttons.push(button);
            }
            Some(b'{') => {
                check_joltage(token, lights)?;
                joltage_seen = true;
            }
            _ => return Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }

    Ok(ParsedMachine {
        line: 1,
        lights,
        machine: Machine::new(target, buttons),
    })
}

/// Parse every non-blank line of an input file.
pub fn parse_input(text: &str) -> Result<Vec<ParsedMachine>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let line_no = idx + 1;
            parse_machine(line)
                .map(|parsed| ParsedMachine {
                    line: line_no,
                    ..parsed
                })
                .map_err(|source| InputError {
                    line: line_no,
                    source,
                })
        })
        .collect()
}

fn check_joltage(token: &str, lights: usize) -> Result<(), ParseError> {
    let inner = token
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| ParseError::Joltage(token.to_string()))?;

    let mut found = 0;
    for value in inner.split(',') {
        value
            .parse::<u32>()
            .map_err(|_| ParseError::Joltage(token.to_string()))?;
        found += 1;
    }

    if found != lights {
        return Err(ParseError::JoltageCount { found, lights });
    }
    Ok(())
}
