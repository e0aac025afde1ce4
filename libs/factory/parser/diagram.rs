//! Light diagram: `[.##.]`

use toggle_solver::{Bitmask, MAX_LIGHTS};

use super::ParseError;

/// Parse a light diagram into `(light count, target mask)`.
pub fn parse_diagram(input: &str) -> Result<(usize, Bitmask), ParseError> {
    let inner = input
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| ParseError::Diagram(input.to_string()))?;

    let lights = inner.chars().count();
    if lights > MAX_LIGHTS {
        return Err(ParseError::TooManyLights {
            found: lights,
            max: MAX_LIGHTS,
        });
    }

    let mut target = Bitmask::ZERO;
    for (idx, c) in inner.chars().enumerate() {
        match c {
            '.' => {}
            '#' => {
                target = target
                    .with_bit(idx)
                    .ok_or_else(|| ParseError::Diagram(input.to_string()))?;
            }
            _ => return Err(ParseError::Diagram(input.to_string())),
        }
    }

    Ok((lights, target))
}
