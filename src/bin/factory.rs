use anyhow::{Context, Result};
use factory_lights::bin_common::{load_config_from_env, parse_args, BinaryRunner, RunConfig};
use factory_lights::factory::{
    init_tracing_with_level, parse_input, BatchRunner, FactoryConfig, PuzzleReport,
};
use tracing::info;

struct FactoryApp {
    run_config: RunConfig,
    config: FactoryConfig,
}

impl FactoryApp {
    fn new(config: FactoryConfig) -> Self {
        Self {
            run_config: RunConfig::new("Factory light solver"),
            config,
        }
    }
}

impl BinaryRunner for FactoryApp {
    async fn run(&mut self) -> Result<()> {
        let input_path = &self.config.input_path;
        let text = tokio::fs::read_to_string(input_path)
            .await
            .with_context(|| format!("failed to read input file {}", input_path))?;

        let machines = parse_input(&text)?;
        info!("Parsed {} machines from {}", machines.len(), input_path);

        let runner = BatchRunner::new(self.config.solver(), self.config.batch.clone());
        let batch = runner.run(machines).await?;

        let report = PuzzleReport::from_batch(batch);
        println!("{}", report.render(self.config.output.format)?);
        Ok(())
    }

    fn config(&self) -> &RunConfig {
        &self.run_config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load config first (before logging is initialized)
    let config_path = load_config_from_env();
    let mut config = FactoryConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    // First positional argument overrides the configured input file
    config.apply_input_arg(parse_args().into_iter().next());

    // Initialize logging with configured level
    init_tracing_with_level(&config.log_level);
    config.log();

    let mut app = FactoryApp::new(config);
    app.execute().await
}
