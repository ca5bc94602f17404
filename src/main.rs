use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tldwatch::app::{AppContext, Result};
use tldwatch::cli::{commands, Cli};
use tldwatch::config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::resolve(cli.debug);

    // Structured JSON logs on stderr; stdout is reserved for the report.
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(e) = run(&config).await {
        error!(error = %e, "pipeline failed");
        // The original tool only logged here; a non-zero exit makes
        // failures visible to cron and CI.
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let ctx = AppContext::new(config)?;
    commands::run(&ctx, std::io::stdout().lock()).await
}
