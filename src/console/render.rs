// Text rendering for the console

use crate::game::{EventLog, Player};
use crate::oracle::SpiritRing;
use crate::rank::rank_label;
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// A ring painted with its presentation tag
pub fn ring_badge(ring: &SpiritRing, colored: bool) -> String {
    let text = format!(" {} ({} năm) ", ring.color(), ring.year());
    if colored {
        format!("\x1b[{}m{}{}", ring.presentation_tag(), text, RESET)
    } else {
        text
    }
}

pub fn status(player: &Player, colored: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tên: {}", player.name);
    let _ = writeln!(out, "Võ Hồn: {}", player.spirit_soul);
    let _ = writeln!(out, "Xuất thân: {}", player.background);
    let _ = writeln!(
        out,
        "Hồn Lực: {} ({})",
        player.spirit_power,
        rank_label(player.spirit_power)
    );

    if player.spirit_rings.is_empty() {
        let _ = write!(out, "Hồn Hoàn: chưa có");
    } else {
        let _ = write!(out, "Hồn Hoàn:");
        for (i, ring) in player.spirit_rings.iter().enumerate() {
            let _ = write!(
                out,
                "\n  {}. {} {}",
                i + 1,
                ring_badge(ring, colored),
                ring.ability()
            );
        }
    }

    out
}

/// Newest `count` entries, newest first
pub fn log(events: &EventLog, count: usize) -> String {
    if events.is_empty() {
        return "Chưa có sự kiện nào.".to_string();
    }

    events
        .iter()
        .take(count)
        .map(|e| format!("[{}] {}", e.at.format("%H:%M:%S"), e.message))
        .collect::<Vec<_>>()
        .join("\n")
}
