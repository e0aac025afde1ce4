//! Binary runner utilities
//!
//! Provides a standardized way to run binaries with a startup banner
//! and a closing summary.

use tracing::info;

/// Configuration for running a binary application
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the binary (for logging)
    pub name: String,
    /// Print the startup/shutdown banners
    pub show_banner: bool,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show_banner: true,
        }
    }

    /// Enable or disable banners
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }
}

/// Trait for binary applications
///
/// Implement this trait to get consistent startup and shutdown logging
/// around the application body.
pub trait BinaryRunner {
    /// Run the application
    async fn run(&mut self) -> anyhow::Result<()>;

    /// Get the run configuration
    fn config(&self) -> &RunConfig;

    /// Print startup banner
    fn print_banner(&self) {
        let config = self.config();
        if !config.show_banner {
            return;
        }
        info!("");
        info!("========================================");
        info!("Starting {}", config.name);
        info!("========================================");
        info!("");
    }

    /// Print shutdown banner
    fn print_shutdown(&self, stats: Option<&str>) {
        let config = self.config();
        if !config.show_banner {
            return;
        }
        info!("");
        info!("========================================");
        info!("{} finished", config.name);
        if let Some(stats) = stats {
            info!("{}", stats);
        }
        info!("========================================");
    }

    /// Execute the binary with banners around it
    async fn execute(&mut self) -> anyhow::Result<()> {
        self.print_banner();
        let result = self.run().await;
        let status = match &result {
            Ok(()) => "completed successfully".to_string(),
            Err(e) => format!("failed: {}", e),
        };
        self.print_shutdown(Some(&status));
        result
    }
}
