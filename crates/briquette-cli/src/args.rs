use clap::{Parser, Subcommand};

use crate::cli::{EstimateArgs, InteractiveArgs};

/// Briquette coverage estimator
///
/// Converts a plot size in acres into the number of briquettes needed at one
/// briquette per 100 square feet, and can ask Gemini for a logistics and
/// application plan. The service credential is read from the API_KEY (or
/// GEMINI_API_KEY) environment variable; estimates work without it.
#[derive(Parser)]
#[command(version, about, name = "briquette")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Model used for logistics reports. Defaults to $BRIQUETTE_MODEL or
    /// gemini-2.5-flash
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Briquette CLI
///
/// Without a command, an interactive session is started.
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate briquettes for an acreage and exit
    #[command(alias = "e")]
    Estimate(EstimateArgs),
    /// Read acreage edits from stdin and keep the estimate up to date
    #[command(alias = "i")]
    Interactive(InteractiveArgs),
}
