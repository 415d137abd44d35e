// Game errors

use crate::oracle::Fault;
use thiserror::Error;

/// Why an action had no mechanical effect; the text is shown to the player
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Chưa có khóa API nào. Dùng lệnh `keys` để cấu hình trước khi hành động.")]
    Unconfigured,

    #[error(
        "Bạn đã hành động quá nhanh! Giới hạn truy cập API đã bị vượt qua. Hãy nghỉ ngơi và thử lại sau một phút."
    )]
    RateLimited,

    #[error("Có lỗi xảy ra với AI: {0}")]
    Transient(String),

    #[error("AI trả về kết quả không hợp lệ. Vui lòng thử lại.")]
    InvalidReply,

    #[error("Cần ít nhất {required} Hồn Lực để săn Hồn Hoàn tiếp theo.")]
    HuntLocked { required: u32 },

    #[error("Đã đủ {0} Hồn Hoàn, không thể săn thêm.")]
    RingsFull(usize),
}

impl From<Fault> for ActionError {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::Unconfigured => ActionError::Unconfigured,
            Fault::RateLimited(_) => ActionError::RateLimited,
            Fault::Transient(msg) => ActionError::Transient(msg),
        }
    }
}

/// Storage and settings errors
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}
