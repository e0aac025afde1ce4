//! Toggle Solver
//!
//! Minimum-press search for "light toggle" machines: each button XORs a
//! fixed set of bits into the machine state, every button may be pressed at
//! most once, and the goal is the fewest presses that turn the all-off state
//! into a target pattern.
//!
//! # Overview
//!
//! - [`SubsetTable`] enumerates every XOR reachable from a list of buttons,
//!   keeping the cheapest subset per mask.
//! - [`Solver`] splits a machine's buttons in two, enumerates both halves
//!   (optionally in parallel) and matches them meet-in-the-middle style.
//! - [`Limits`] bounds the per-half enumeration so oversized machines fail
//!   fast with [`SolveError::CapacityExceeded`].
//!
//! # Example
//!
//! ```
//! use toggle_solver::{solve, Machine};
//!
//! // Target 0b011 with buttons 0b011 and 0b110: press the first one.
//! let machine = Machine::from_bits(0b011, &[0b011, 0b110]);
//! let outcome = solve(&machine).unwrap();
//! assert_eq!(outcome.presses(), Some(1));
//!
//! // A bit no button touches can never light up.
//! let stuck = Machine::from_bits(0b10, &[0b01]);
//! assert!(!solve(&stuck).unwrap().is_reachable());
//! ```

pub mod bitmask;
pub mod combine;
pub mod enumerate;
pub mod error;
pub mod limits;
pub mod machine;
pub mod outcome;

pub use bitmask::{Bitmask, MAX_LIGHTS};
pub use combine::{solve, Solver};
pub use enumerate::{Reach, SubsetTable};
pub use error::{Result, SolveError};
pub use limits::{Limits, MAX_HALF_BUTTONS};
pub use machine::{Button, Machine};
pub use outcome::{Outcome, Solution};
