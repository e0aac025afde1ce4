//! Subset enumeration: every reachable XOR of a button list, at minimum cost.
//!
//! The table is built by doubling. Starting from `{0 -> 0}`, each button is
//! folded in by pairing it with a snapshot of the entries present *before*
//! that button, so no button is ever counted twice in one subset.

use std::collections::HashMap;

use tracing::trace;

use crate::bitmask::Bitmask;
use crate::error::{Result, SolveError};
use crate::limits::{Limits, MAX_HALF_BUTTONS};
use crate::machine::Button;

/// Cheapest known way to reach one mask within a half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    /// Number of buttons pressed.
    pub presses: u32,
    /// Bit `i` set when the half's `i`-th button is pressed.
    pub chosen: u64,
}

impl Reach {
    const EMPTY: Reach = Reach {
        presses: 0,
        chosen: 0,
    };

    /// Merge order: fewer presses first, then the smaller chosen set.
    fn beats(&self, other: &Reach) -> bool {
        (self.presses, self.chosen) < (other.presses, other.chosen)
    }
}

/// Map from every mask reachable with one half's buttons to its cheapest [`Reach`].
///
/// Merge rule: a candidate replaces an existing entry only when it needs
/// strictly fewer presses, or the same presses with a numerically smaller
/// chosen set. The result does not depend on hash iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetTable {
    entries: HashMap<Bitmask, Reach>,
    buttons: usize,
}

impl SubsetTable {
    /// Enumerate all `2^k` subsets of `buttons`.
    ///
    /// Fails with [`SolveError::CapacityExceeded`] before doing any work if
    /// `buttons` is larger than `limits` allow.
    pub fn enumerate(buttons: &[Button], limits: &Limits) -> Result<Self> {
        if !limits.allows(buttons.len()) {
            return Err(SolveError::CapacityExceeded {
                half_buttons: buttons.len(),
                limit: limits.max_half_buttons.min(MAX_HALF_BUTTONS),
            });
        }

        // The span never holds more than 2^k masks; cap the upfront reservation.
        let mut entries = HashMap::with_capacity(1usize << buttons.len().min(16));
        entries.insert(Bitmask::ZERO, Reach::EMPTY);

        let mut snapshot: Vec<(Bitmask, Reach)> = Vec::with_capacity(entries.capacity());
        for (idx, button) in buttons.iter().enumerate() {
            snapshot.clear();
            snapshot.extend(entries.iter().map(|(mask, reach)| (*mask, *reach)));

            for (mask, reach) in &snapshot {
                let candidate = Reach {
                    presses: reach.presses + 1,
                    chosen: reach.chosen | (1u64 << idx),
                };
                merge(&mut entries, *mask ^ button.mask(), candidate);
            }

            trace!(
                button = idx,
                mask = %button.mask(),
                reachable = entries.len(),
                "folded button into subset table"
            );
        }

        Ok(Self {
            entries,
            buttons: buttons.len(),
        })
    }

    /// Minimum presses needed to reach `mask`, if reachable.
    pub fn presses(&self, mask: Bitmask) -> Option<u32> {
        self.entries.get(&mask).map(|reach| reach.presses)
    }

    pub fn reach(&self, mask: Bitmask) -> Option<Reach> {
        self.entries.get(&mask).copied()
    }

    /// Number of distinct reachable masks (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buttons this table was built from.
    pub fn button_count(&self) -> usize {
        self.buttons
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bitmask, Reach)> + '_ {
        self.entries.iter().map(|(mask, reach)| (*mask, *reach))
    }

    /// Plain `mask -> presses` view of the table.
    pub fn press_counts(&self) -> HashMap<Bitmask, u32> {
        self.entries
            .iter()
            .map(|(mask, reach)| (*mask, reach.presses))
            .collect()
    }
}

fn merge(entries: &mut HashMap<Bitmask, Reach>, mask: Bitmask, candidate: Reach) {
    entries
        .entry(mask)
        .and_modify(|existing| {
            if candidate.beats(existing) {
                *existing = candidate;
            }
        })
        .or_insert(candidate);
}
