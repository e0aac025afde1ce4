//! Solve results.

use serde::Serialize;

/// A minimal set of button presses reaching the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    presses: u32,
    buttons: Vec<usize>,
}

impl Solution {
    pub(crate) fn from_chosen(chosen: u64) -> Self {
        let buttons: Vec<usize> = (0..u64::BITS as usize)
            .filter(|idx| chosen & (1u64 << idx) != 0)
            .collect();
        Self {
            presses: chosen.count_ones(),
            buttons,
        }
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Indices into the machine's button list, ascending.
    pub fn buttons(&self) -> &[usize] {
        &self.buttons
    }
}

/// Result of solving one machine.
///
/// `Reached` with zero presses (target already all-off) and `Unreachable`
/// are distinct outcomes even though the batch total may count both as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Reached(Solution),
    Unreachable,
}

impl Outcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Outcome::Reached(_))
    }

    /// Minimal press count, or `None` when the target cannot be reached.
    pub fn presses(&self) -> Option<u32> {
        match self {
            Outcome::Reached(solution) => Some(solution.presses()),
            Outcome::Unreachable => None,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Reached(solution) => Some(solution),
            Outcome::Unreachable => None,
        }
    }

    /// Press count for a batch total: unreachable counts as 0.
    pub fn compat_presses(&self) -> u64 {
        self.presses().map(u64::from).unwrap_or(0)
    }
}
