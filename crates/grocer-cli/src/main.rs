//! Grocer CLI Application
//!
//! Command-line interface for the grocer grocery tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use grocer_core::{GrocerBuilder, GrocerConfig, SqliteStore};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        missed_items,
        command,
    } = Args::parse();

    let mut config = GrocerConfig::load().context("Failed to load configuration")?;
    if database_file.is_some() {
        config.database_file = database_file;
    }
    if let Some(policy) = missed_items {
        config.missed_items = policy.into();
    }

    let grocer = GrocerBuilder::from_config(&config)
        .build()
        .await
        .context("Failed to initialize grocer")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Grocer started on the {} backend", grocer.backend());

    match command {
        Some(Item { command }) => {
            Cli::new(grocer, renderer)
                .handle_item_command(command)
                .await
        }
        Some(Shop { command }) => {
            Cli::new(grocer, renderer)
                .handle_shop_command(command)
                .await
        }
        Some(History { command }) => {
            Cli::new(grocer, renderer)
                .handle_history_command(command)
                .await
        }
        Some(Migrate) => {
            let path = match config.database_file {
                Some(path) => path,
                None => GrocerBuilder::default_database_path()?,
            };
            let local = SqliteStore::open(&path)
                .await
                .with_context(|| format!("Failed to open local database {}", path.display()))?;
            Cli::new(grocer, renderer).migrate(&local).await
        }
        None => Cli::new(grocer, renderer).overview().await,
    }
}
