//! Binary crate for the `weather-lookup` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive lookup form
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
