use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use toggle_solver::{Limits, Solver, MAX_HALF_BUTTONS};
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main factory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Puzzle input, one machine per line
    #[serde(default = "default_input_path")]
    pub input_path: String,

    #[serde(default)]
    pub solver: SolverConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Solver tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Largest half (in buttons) the enumerator will accept
    #[serde(default = "default_max_half_buttons")]
    pub max_half_buttons: usize,

    /// Enumerate both halves of a machine concurrently
    #[serde(default = "default_parallel_halves")]
    pub parallel_halves: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_half_buttons: default_max_half_buttons(),
            parallel_halves: default_parallel_halves(),
        }
    }
}

/// Batch driver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Machines solved at the same time
    #[serde(default = "default_max_concurrent_machines")]
    pub max_concurrent_machines: usize,

    /// Per-machine time budget; unlimited when absent.
    ///
    /// Expiry fails the batch but cannot stop the solver: the machine keeps
    /// its blocking thread until enumeration finishes, and the process waits
    /// for it on exit. `solver.max_half_buttons` bounds that tail.
    #[serde(default)]
    pub machine_timeout_ms: Option<u64>,

    #[serde(default)]
    pub unreachable: UnreachablePolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_machines: default_max_concurrent_machines(),
            machine_timeout_ms: None,
            unreachable: UnreachablePolicy::default(),
        }
    }
}

/// What the batch total does with a machine whose target cannot be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachablePolicy {
    /// Add 0 presses and log a warning
    #[default]
    CountAsZero,
    /// Abort the batch
    Fail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_input_path() -> String {
    "input/day10.txt".to_string()
}

fn default_max_half_buttons() -> usize {
    Limits::default().max_half_buttons
}

fn default_parallel_halves() -> bool {
    true
}

fn default_max_concurrent_machines() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            input_path: default_input_path(),
            solver: SolverConfig::default(),
            batch: BatchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl FactoryConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: FactoryConfig = serde_yaml::from_str(&yaml_content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from YAML file, or use defaults if the file doesn't exist
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Self::load(config_path);
        }

        info!("Config file {} not found, using defaults", config_path.display());
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist

        if let Ok(input_path) = std::env::var("FACTORY_INPUT") {
            info!("Overriding input path from environment variable");
            self.input_path = input_path;
        }
    }

    /// Replace the input path with a command line argument, if one was given.
    /// Takes precedence over `FACTORY_INPUT` and the config file.
    pub fn apply_input_arg(&mut self, arg: Option<String>) {
        if let Some(input_path) = arg {
            info!("Overriding input path from command line");
            self.input_path = input_path;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        if self.input_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "input_path cannot be empty".to_string(),
            ));
        }

        if self.solver.max_half_buttons == 0 || self.solver.max_half_buttons > MAX_HALF_BUTTONS {
            return Err(ConfigError::ValidationError(format!(
                "solver.max_half_buttons must be between 1 and {}",
                MAX_HALF_BUTTONS
            )));
        }

        if self.batch.max_concurrent_machines == 0 {
            return Err(ConfigError::ValidationError(
                "batch.max_concurrent_machines must be greater than 0".to_string(),
            ));
        }

        if self.batch.machine_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationError(
                "batch.machine_timeout_ms must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Solver built from the `solver` section
    pub fn solver(&self) -> Solver {
        Solver::new()
            .with_limits(Limits::new(self.solver.max_half_buttons))
            .with_parallel_halves(self.solver.parallel_halves)
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Input: {}", self.input_path);
        info!("  Log level: {}", self.log_level);
        info!("  Max buttons per half: {}", self.solver.max_half_buttons);
        info!("  Parallel halves: {}", self.solver.parallel_halves);
        info!("  Concurrent machines: {}", self.batch.max_concurrent_machines);
        match self.batch.machine_timeout_ms {
            Some(ms) => info!("  Machine timeout: {} ms", ms),
            None => info!("  Machine timeout: none"),
        }
        info!("  Unreachable machines: {:?}", self.batch.unreachable);
        info!("  Output format: {:?}", self.output.format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = FactoryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.solver.max_half_buttons, 22);
        assert!(config.solver.parallel_halves);
        assert_eq!(config.batch.unreachable, UnreachablePolicy::CountAsZero);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
log_level: debug
batch:
  machine_timeout_ms: 500
  unreachable: fail
output:
  format: json
"#;
        let config: FactoryConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.input_path, "input/day10.txt");
        assert_eq!(config.batch.machine_timeout_ms, Some(500));
        assert_eq!(config.batch.unreachable, UnreachablePolicy::Fail);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.solver.max_half_buttons, 22);
        assert!(config.batch.max_concurrent_machines > 0);
    }

    #[test]
    fn test_config_validation() {
        let mut config = FactoryConfig::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = FactoryConfig::default();
        config.solver.max_half_buttons = MAX_HALF_BUTTONS + 1;
        assert!(config.validate().is_err());

        let mut config = FactoryConfig::default();
        config.solver.max_half_buttons = 0;
        assert!(config.validate().is_err());

        let mut config = FactoryConfig::default();
        config.batch.max_concurrent_machines = 0;
        assert!(config.validate().is_err());

        let mut config = FactoryConfig::default();
        config.batch.machine_timeout_ms = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_solver_from_config() {
        let mut config = FactoryConfig::default();
        config.solver.max_half_buttons = 12;
        config.solver.parallel_halves = false;

        let solver = config.solver();
        assert_eq!(solver.limits().max_half_buttons, 12);
        assert!(!solver.parallel_halves());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: warn\nsolver:\n  max_half_buttons: 18").unwrap();

        let config = FactoryConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.solver.max_half_buttons, 18);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "solver:\n  max_half_buttons: 40").unwrap();

        assert!(matches!(
            FactoryConfig::load(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FactoryConfig::load_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.solver.max_half_buttons, 22);
    }

    #[test]
    fn test_input_path_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factory_config.yaml");
        std::fs::write(&path, "input_path: from/file.txt\n").unwrap();

        std::env::set_var("FACTORY_INPUT", "from/env.txt");
        let from_file = FactoryConfig::load(&path);
        let from_defaults = FactoryConfig::load_or_default(dir.path().join("absent.yaml"));
        std::env::remove_var("FACTORY_INPUT");

        let mut config = from_file.unwrap();
        assert_eq!(config.input_path, "from/env.txt");
        assert_eq!(from_defaults.unwrap().input_path, "from/env.txt");

        config.apply_input_arg(None);
        assert_eq!(config.input_path, "from/env.txt");
        config.apply_input_arg(Some("from/cli.txt".to_string()));
        assert_eq!(config.input_path, "from/cli.txt");
    }
}
