use anyhow::{Context, Result};
use goci::cli::{output::format_failure, Cli};
use goci::core::PipelineConfig;
use goci::execution::PipelineRunner;
use goci::process::SystemLauncher;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for step results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load pipeline config {}", path.display()))?,
        None => PipelineConfig::reference(),
    };

    let runner = PipelineRunner::new(config, SystemLauncher::new());

    if let Err(e) = runner.run(&cli.project, std::io::stdout()).await {
        eprintln!("{}", format_failure(&e));
        std::process::exit(1);
    }

    Ok(())
}
