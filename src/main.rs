use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod models;
mod services;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("barry=warn")),
        )
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = commands::run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
