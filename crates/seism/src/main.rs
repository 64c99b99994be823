use anyhow::Result;
use clap::Parser;

mod cli;
mod render;

use cli::Report;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Report::parse().run().await
}
