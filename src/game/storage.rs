// Snapshot and settings persistence

use super::error::GameError;
use super::types::Game;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// User settings kept between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_keys: Vec<String>,
}

fn ensure_parent(path: &Path) -> Result<(), GameError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write the game snapshot as JSON
pub fn save_game(path: &Path, game: &Game) -> Result<(), GameError> {
    ensure_parent(path)?;

    let content = serde_json::to_string_pretty(game)?;
    fs::write(path, content)?;

    info!(
        path = %path.display(),
        events = game.events.len(),
        "game saved"
    );
    Ok(())
}

/// Read the game snapshot; `None` when there is no save
pub fn load_game(path: &Path, log_capacity: Option<usize>) -> Result<Option<Game>, GameError> {
    if !path.exists() {
        debug!(path = %path.display(), "no save file");
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let mut game: Game = serde_json::from_str(&content)?;
    game.events.set_capacity(log_capacity);

    info!(path = %path.display(), player = %game.player.name, "game loaded");
    Ok(Some(game))
}

/// Like `load_game`, but a save that fails to decode is removed
pub fn load_or_discard(
    path: &Path,
    log_capacity: Option<usize>,
) -> Result<Option<Game>, GameError> {
    let result = load_game(path, log_capacity);

    if let Err(GameError::Json(e)) = &result {
        warn!(path = %path.display(), error = %e, "save is corrupt, discarding");
        if let Err(e) = remove_save(path) {
            warn!(error = %e, "failed to remove corrupt save");
        }
    }
    result
}

pub fn has_save(path: &Path) -> bool {
    path.is_file()
}

/// Discard a corrupt or obsolete save
pub fn remove_save(path: &Path) -> Result<(), GameError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Read settings; missing file yields defaults
pub fn load_settings(path: &Path) -> Result<Settings, GameError> {
    if !path.exists() {
        debug!(path = %path.display(), "settings not found, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    debug!(path = %path.display(), keys = settings.api_keys.len(), "settings loaded");
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), GameError> {
    ensure_parent(path)?;
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
