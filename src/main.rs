use anyhow::{Context, Result};
use clap::Parser;
use fxnotify::config::AppConfig;
use fxnotify::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to an optional .env file with credentials
    #[arg(short, long)]
    env_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // The implicit .env is optional, the variables may already be exported.
    // A file named on the command line is not.
    match &cli.env_file {
        Some(path) => {
            dotenv::from_path(path)
                .with_context(|| format!("Failed to load env file: {path}"))?;
        }
        None => {
            dotenv::dotenv().ok();
        }
    }

    let result = match AppConfig::from_env() {
        Ok(config) => fxnotify::run(&config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Invocation failed");
    }
    result
}
