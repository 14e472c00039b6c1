use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::validator::ValueRequiredValidator;
use inquire::{InquireError, Text};
use lookup_core::config::resolve_backend_url;
use lookup_core::{Config, HttpWeatherStore, LookupOutcome, submit_lookup};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Look up stored weather records by ID")]
pub struct Cli {
    /// Backend base URL; overrides the configured value for this invocation.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a stored weather record by its ID.
    Lookup {
        /// Record ID, e.g. "New-York-2025-06-23". Omit for an interactive prompt.
        id: Option<String>,
    },

    /// Configure the backend base URL.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Lookup { id } => {
                let config = Config::load()?;
                let base_url = resolve_backend_url(self.base_url.as_deref(), &config);
                let store = HttpWeatherStore::new(base_url);

                match id {
                    Some(id) => {
                        let outcome = submit(&store, &id).await;
                        if !outcome.is_success() {
                            std::process::exit(1);
                        }
                    }
                    None => lookup_loop(&store).await?,
                }
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

/// One submission: busy label, one fetch, rendered outcome.
async fn submit(store: &HttpWeatherStore, id: &str) -> LookupOutcome {
    println!("Submitting...");
    let outcome = submit_lookup(store, id).await;
    print!("{}", render::render_outcome(&outcome));
    outcome
}

/// Interactive form: prompt for an ID, submit, render, repeat. A successful
/// submission clears the field for the next prompt; a failed one keeps the
/// typed ID so the user can correct it. Esc or Ctrl-C leaves the loop.
async fn lookup_loop(store: &HttpWeatherStore) -> Result<()> {
    let mut pending = String::new();

    loop {
        let prompt = Text::new("ID:")
            .with_placeholder("e.g. New-York-2025-06-23")
            .with_initial_value(&pending)
            .with_validator(ValueRequiredValidator::default())
            .prompt();

        let id = match prompt {
            Ok(id) => id,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read ID"),
        };

        let outcome = submit(store, &id).await;
        pending = if outcome.is_success() { String::new() } else { id };
    }

    Ok(())
}

/// Interactive configuration of the backend base URL.
fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let url = Text::new("Backend base URL:")
        .with_initial_value(config.backend_url())
        .with_validator(ValueRequiredValidator::default())
        .prompt()
        .context("Failed to read backend URL")?;

    config.set_backend_url(url);
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
