mod brain;
mod console;
mod game;
mod keys;
mod oracle;
mod parse;
mod prompt;
mod rank;

use brain::{Brain, BrainConfig};
use clap::Parser;
use console::Console;
use game::{GameConfig, Settings, storage};
use keys::{CredentialPool, KeyConfig};
use oracle::Oracle;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::fmt;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "soulring")]
#[command(about = "Đấu La Đại Lục role-playing game narrated by Gemini")]
struct Args {
    /// Directory for the save and settings files (default: ~/.soulring)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// History file path
    #[arg(long)]
    history_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = args.log_level.parse::<Level>().unwrap_or(Level::WARN);
    fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let mut game_config = GameConfig::from_env();
    if let Some(dir) = args.data_dir {
        game_config.data_dir = dir;
    }
    let brain_config = BrainConfig::from_env()?;
    let key_config = KeyConfig::from_env();

    // Saved settings win over the environment
    let settings = storage::load_settings(&game_config.settings_path()).unwrap_or_else(|e| {
        warn!(error = %e, "failed to read settings, ignoring");
        Settings::default()
    });
    let api_keys = if settings.api_keys.is_empty() {
        key_config.api_keys
    } else {
        settings.api_keys
    };

    info!(
        model = %brain_config.model,
        data_dir = %game_config.data_dir.display(),
        keys = api_keys.len(),
        "Configuration loaded"
    );

    let pool = CredentialPool::new(&api_keys).shared();
    let brain = Brain::new(brain_config)?;
    let oracle = Arc::new(Oracle::new(brain, pool));

    let history_file = args
        .history_file
        .unwrap_or_else(|| game_config.data_dir.join("history"));

    let console = Console::new(oracle, game_config, history_file)?;
    console.run().await?;

    Ok(())
}
