// Rank module - labels derived from numeric attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank names keyed by power floored to a multiple of ten
const RANK_TABLE: [(u32, &str); 11] = [
    (0, "Hồn Sĩ"),
    (10, "Hồn Sư"),
    (20, "Đại Hồn Sư"),
    (30, "Hồn Tôn"),
    (40, "Hồn Tông"),
    (50, "Hồn Vương"),
    (60, "Hồn Đế"),
    (70, "Hồn Thánh"),
    (80, "Hồn Đấu La"),
    (90, "Phong Hào Đấu La"),
    (100, "Thần"),
];

pub const UNRANKED: &str = "Chưa xếp hạng";

/// Rank title for a power value
pub fn rank_label(power: u32) -> &'static str {
    let floored = power / 10 * 10;
    RANK_TABLE
        .iter()
        .find(|(level, _)| *level == floored)
        .map(|(_, name)| *name)
        .unwrap_or(UNRANKED)
}

/// Ring color, ordered by tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingColor {
    White,
    Yellow,
    Purple,
    Black,
    Red,
}

impl RingColor {
    /// In-world color name
    pub fn label(&self) -> &'static str {
        match self {
            RingColor::White => "Trắng",
            RingColor::Yellow => "Vàng",
            RingColor::Purple => "Tím",
            RingColor::Black => "Đen",
            RingColor::Red => "Đỏ",
        }
    }

    /// ANSI SGR parameters used to paint the ring
    pub fn presentation_tag(&self) -> &'static str {
        match self {
            RingColor::White => "30;107",
            RingColor::Yellow => "30;103",
            RingColor::Purple => "97;45",
            RingColor::Black => "97;40",
            RingColor::Red => "97;41",
        }
    }
}

impl fmt::Display for RingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color category plus presentation tag for a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingTier {
    pub color: RingColor,
    pub tag: &'static str,
}

/// Band a tenure magnitude; lower bounds are inclusive
pub fn tier_label(year: u64) -> RingTier {
    let color = match year {
        0..100 => RingColor::White,
        100..1_000 => RingColor::Yellow,
        1_000..10_000 => RingColor::Purple,
        10_000..100_000 => RingColor::Black,
        _ => RingColor::Red,
    };

    RingTier {
        color,
        tag: color.presentation_tag(),
    }
}
