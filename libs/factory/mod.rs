//! Factory
//!
//! Everything around the toggle solver needed to answer the puzzle: input
//! parsing, configuration, the batch driver and report rendering.

pub mod batch;
pub mod config;
pub mod parser;
pub mod utils;

// Re-export commonly used items
pub use batch::{BatchError, BatchReport, BatchRunner, PuzzleReport};
pub use config::{
    BatchConfig, ConfigError, FactoryConfig, OutputFormat, SolverConfig, UnreachablePolicy,
};
pub use parser::{parse_input, parse_machine, InputError, ParseError, ParsedMachine};
pub use utils::{init_tracing, init_tracing_with_level};
