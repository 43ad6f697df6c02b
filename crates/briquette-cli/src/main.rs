//! Briquette CLI Application
//!
//! Command-line interface for the briquette coverage estimator.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use briquette_core::{GeminiClientBuilder, ServiceConfig};
use clap::Parser;
use cli::{Cli, InteractiveArgs};
use log::{debug, info};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        model,
        command,
    } = Args::parse();

    let config = ServiceConfig::from_env();
    debug!("Service configuration: {config:?}");
    if !config.has_api_key() {
        info!("No API key configured; logistics reports will fail");
    }

    let client = GeminiClientBuilder::from_config(config)
        .with_model(model)
        .build()
        .context("Failed to initialize narrative client")?;

    let cli = Cli::new(client, TerminalRenderer::new(!no_color));

    info!("Briquette started");

    match command {
        Some(Estimate(args)) => cli.estimate(args).await,
        Some(Interactive(args)) => cli.interactive(args).await,
        None => cli.interactive(InteractiveArgs::default()).await,
    }
}
