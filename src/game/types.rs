// Game data types

use crate::oracle::SpiritRing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Maximum number of rings a player can hold
pub const MAX_RINGS: usize = 9;

/// Starting power for a custom or generated background
pub const CUSTOM_BACKGROUND_POWER: u32 = 3;

/// Preset spirit souls offered at character creation
pub const AVAILABLE_SPIRIT_SOULS: [&str; 4] =
    ["Lam Ngân Thảo", "Linh Mâu", "Bạch Nhãn Lang", "U Minh Linh Miêu"];

/// Preset background with its starting power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundOption {
    pub name: &'static str,
    pub description: &'static str,
    pub start_power: u32,
}

pub const AVAILABLE_BACKGROUNDS: [BackgroundOption; 3] = [
    BackgroundOption {
        name: "Công Tước Phủ",
        description: "Xuất thân cao quý, tài nguyên dồi dào.",
        start_power: 5,
    },
    BackgroundOption {
        name: "Gia Đình Bình Thường",
        description: "Khởi đầu khiêm tốn, dựa vào nỗ lực bản thân.",
        start_power: 3,
    },
    BackgroundOption {
        name: "Thợ Rèn Chi Gia",
        description: "Sinh ra trong gia đình rèn đúc, ý chí kiên định.",
        start_power: 3,
    },
];

/// Player state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub spirit_soul: String,
    pub background: String,
    pub spirit_power: u32,
    /// Acquisition order; append-only
    pub spirit_rings: Vec<SpiritRing>,
}

impl Player {
    /// Slot number of the next ring, starting at 1
    pub fn next_ring_slot(&self) -> u32 {
        self.spirit_rings.len() as u32 + 1
    }

    /// Power needed before the next hunt is allowed
    pub fn hunt_threshold(&self) -> u32 {
        self.next_ring_slot() * 10
    }

    pub fn can_hunt(&self) -> bool {
        self.spirit_power > 0
            && self.spirit_power >= self.hunt_threshold()
            && self.spirit_rings.len() < MAX_RINGS
    }
}

/// One narrative entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl GameEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Newest-first event log, optionally bounded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: VecDeque<GameEvent>,
    #[serde(skip)]
    capacity: Option<usize>,
}

impl EventLog {
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Set the bound and drop the oldest entries beyond it
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        self.trim();
    }

    pub fn push(&mut self, message: impl Into<String>) -> &GameEvent {
        self.entries.push_front(GameEvent::new(message));
        self.trim();
        &self.entries[0]
    }

    fn trim(&mut self) {
        if let Some(cap) = self.capacity {
            self.entries.truncate(cap.max(1));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&GameEvent> {
        self.entries.front()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }
}

/// Everything that is saved: the player plus the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub player: Player,
    pub events: EventLog,
}

impl Game {
    pub fn new(
        name: impl Into<String>,
        spirit_soul: impl Into<String>,
        background: impl Into<String>,
        start_power: u32,
        log_capacity: Option<usize>,
    ) -> Self {
        let player = Player {
            name: name.into(),
            spirit_soul: spirit_soul.into(),
            background: background.into(),
            spirit_power: start_power,
            spirit_rings: Vec::new(),
        };

        let mut events = EventLog::with_capacity(log_capacity);
        events.push(format!(
            "Chào mừng {} đến với Đấu La Đại Lục. Với xuất thân \"{}\", hành trình cùng Võ Hồn {} chính thức bắt đầu!",
            player.name, player.background, player.spirit_soul
        ));

        Self { player, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(power: u32, rings: usize) -> Player {
        Player {
            spirit_power: power,
            spirit_rings: (0..rings).map(|_| SpiritRing::new(100, "x")).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_hunt_gating() {
        assert!(!player(0, 0).can_hunt());
        assert!(!player(9, 0).can_hunt());
        assert!(player(10, 0).can_hunt());
        assert!(!player(19, 1).can_hunt());
        assert!(player(20, 1).can_hunt());
        assert!(!player(200, 9).can_hunt());
    }

    #[test]
    fn test_next_ring_slot() {
        assert_eq!(player(0, 0).next_ring_slot(), 1);
        assert_eq!(player(0, 3).next_ring_slot(), 4);
    }

    #[test]
    fn test_log_newest_first() {
        let mut log = EventLog::default();
        log.push("first");
        log.push("second");

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(log.latest().unwrap().message, "second");
    }

    #[test]
    fn test_log_ids_unique() {
        let mut log = EventLog::default();
        let a = log.push("a").id;
        let b = log.push("a").id;
        assert_ne!(a, b);
    }

    #[test]
    fn test_log_capacity_drops_oldest() {
        let mut log = EventLog::with_capacity(Some(2));
        log.push("1");
        log.push("2");
        log.push("3");

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["3", "2"]);
    }

    #[test]
    fn test_unbounded_log() {
        let mut log = EventLog::with_capacity(None);
        for i in 0..1000 {
            log.push(i.to_string());
        }
        assert_eq!(log.len(), 1000);
    }

    #[test]
    fn test_new_game_welcome() {
        let game = Game::new("Vũ Lân", "Lam Ngân Thảo", "Công Tước Phủ", 5, None);
        assert_eq!(game.player.spirit_power, 5);
        assert_eq!(game.events.len(), 1);
        assert!(game.events.latest().unwrap().message.contains("Vũ Lân"));
    }

    #[test]
    fn test_snapshot_shape() {
        let game = Game::new("A", "B", "C", 3, None);
        let value = serde_json::to_value(&game).unwrap();
        assert!(value["player"]["spiritPower"].is_number());
        assert!(value["events"].is_array());
    }
}
