use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use dashstore::config::{Config, RefreshMode};
use dashstore::logging::init_tracing;
use dashstore::store::DataStore;

#[derive(Parser, Debug)]
#[command(name = "dashstore", version, about = "Fetch dashboard user and notification data")]
struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the dashboard base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Dispatch the core refresh requests concurrently
    #[arg(long)]
    concurrent: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the signed-in user's profile
    Profile,
    /// Print the notification list
    Notifications,
    /// Print the notification count
    Count,
    /// Refresh profile and count, then print the snapshot
    Refresh,
    /// Refresh everything, then print the snapshot
    Snapshot,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let store = DataStore::from_config(&config)?;
    let client = store.client();

    match cli.command {
        Command::Profile => print_json(&client.fetch_user_profile().await?),
        Command::Notifications => print_json(&client.fetch_notification_list().await?),
        Command::Count => print_json(&client.fetch_notification_count().await?),
        Command::Refresh => {
            store.refresh_core().await?;
            print_json(&store.snapshot())
        }
        Command::Snapshot => {
            store.refresh_core().await?;
            store.load_notifications().await?;
            print_json(&store.snapshot())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if cli.concurrent {
        config.store.refresh_mode = RefreshMode::Concurrent;
    }

    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
