//! Meet-in-the-middle search over two enumerated halves.

use tracing::debug;

use crate::bitmask::Bitmask;
use crate::enumerate::SubsetTable;
use crate::error::{Result, SolveError};
use crate::limits::{Limits, MAX_HALF_BUTTONS};
use crate::machine::Machine;
use crate::outcome::{Outcome, Solution};

/// Minimum-press solver for toggle machines.
///
/// Splits the button list in two, enumerates each half with
/// [`SubsetTable::enumerate`], then pairs every right-half mask `r` with the
/// left-half entry for `target ^ r`. Every subset of the full list splits
/// uniquely into a left part and a right part, so the pairing covers all
/// `2^n` combinations while only ever materialising `2 * 2^(n/2)` of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    limits: Limits,
    parallel_halves: bool,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set enumeration limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Enumerate the two halves on the rayon pool instead of sequentially
    pub fn with_parallel_halves(mut self, parallel: bool) -> Self {
        self.parallel_halves = parallel;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn parallel_halves(&self) -> bool {
        self.parallel_halves
    }

    /// Solve using the balanced split `floor(n / 2)`.
    pub fn solve(&self, machine: &Machine) -> Result<Outcome> {
        self.solve_with_split(machine, machine.midpoint())
    }

    /// Solve with the left half taking the first `split` buttons.
    ///
    /// Any split in `0..=n` gives the same press count; only the cost of
    /// enumeration changes.
    pub fn solve_with_split(&self, machine: &Machine, split: usize) -> Result<Outcome> {
        let total = machine.button_count();
        if split > total {
            return Err(SolveError::InvalidSplit {
                split,
                buttons: total,
            });
        }

        let (left, right) = machine.buttons().split_at(split);
        for half in [left.len(), right.len()] {
            if !self.limits.allows(half) {
                return Err(SolveError::CapacityExceeded {
                    half_buttons: half,
                    limit: self.limits.max_half_buttons.min(MAX_HALF_BUTTONS),
                });
            }
        }

        let (left_table, right_table) = if self.parallel_halves {
            rayon::join(
                || SubsetTable::enumerate(left, &self.limits),
                || SubsetTable::enumerate(right, &self.limits),
            )
        } else {
            (
                SubsetTable::enumerate(left, &self.limits),
                SubsetTable::enumerate(right, &self.limits),
            )
        };
        let (left_table, right_table) = (left_table?, right_table?);

        let best = cheapest_pair(machine.target(), &left_table, &right_table, split);

        debug!(
            target = %machine.target(),
            buttons = total,
            split,
            left_masks = left_table.len(),
            right_masks = right_table.len(),
            presses = ?best.map(u64::count_ones),
            "solved machine"
        );

        Ok(match best {
            Some(chosen) => Outcome::Reached(Solution::from_chosen(chosen)),
            None => Outcome::Unreachable,
        })
    }
}

/// Chosen-button set of the cheapest left/right pair XOR-ing to `target`.
///
/// Right-half indices are shifted up by `split` so the set indexes the full
/// button list. Ties on press count go to the numerically smaller set.
fn cheapest_pair(
    target: Bitmask,
    left: &SubsetTable,
    right: &SubsetTable,
    split: usize,
) -> Option<u64> {
    right
        .iter()
        .filter_map(|(right_mask, right_reach)| {
            let left_reach = left.reach(target ^ right_mask)?;
            Some((
                left_reach.presses + right_reach.presses,
                left_reach.chosen | (right_reach.chosen << split),
            ))
        })
        .min()
        .map(|(_, chosen)| chosen)
}

/// Solve `machine` with default limits on the current thread.
pub fn solve(machine: &Machine) -> Result<Outcome> {
    Solver::default().solve(machine)
}
