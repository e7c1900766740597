use clap::Parser;
use dotd::cli::{self, Cli};
use dotd::config::Config;
use dotd::services::store::StoreError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    cli::run(cli, &config).await
}
