//! Factory Lights - Main Library
//!
//! Solves the "Factory" toggle-light puzzle: for each machine, the fewest
//! button presses that turn every light into its target state.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI, runners)
//! - **toggle_solver**: Meet-in-the-middle solver core (re-exported from workspace)
//! - **factory**: Parser, config, batch driver and report (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use factory_lights::bin_common::{load_config_from_env, parse_args};
//! use factory_lights::factory::FactoryConfig;
//! ```

// Re-export workspace libraries for convenience
pub use factory;
pub use toggle_solver;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables
    //!
    //! Shared startup plumbing for the binaries: config path lookup and the
    //! banner/shutdown wrapper.

    pub mod cli;
    pub mod runner;

    pub use cli::{load_config_from_env, parse_args, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
    pub use runner::{BinaryRunner, RunConfig};
}
