// Game module - player state, event log, session and persistence

pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod types;

pub use config::GameConfig;
pub use error::{ActionError, GameError};
pub use session::Session;
pub use storage::Settings;
pub use types::{
    AVAILABLE_BACKGROUNDS, AVAILABLE_SPIRIT_SOULS, BackgroundOption, CUSTOM_BACKGROUND_POWER,
    EventLog, Game, GameEvent, MAX_RINGS, Player,
};
