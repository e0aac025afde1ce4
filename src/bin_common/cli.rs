//! CLI utilities for binaries
//!
//! Config path lookup and command line arguments.

use std::path::PathBuf;

/// Environment variable that points at the config file
pub const CONFIG_PATH_ENV: &str = "FACTORY_CONFIG_PATH";

/// Config file used when [`CONFIG_PATH_ENV`] is unset or blank
pub const DEFAULT_CONFIG_PATH: &str = "config/factory_config.yaml";

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use factory_lights::bin_common::load_config_from_env;
///
/// let path = load_config_from_env();
/// assert!(path.extension().is_some());
/// ```
pub fn load_config_from_env() -> PathBuf {
    resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok())
}

fn resolve_config_path(from_env: Option<String>) -> PathBuf {
    from_env
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}
