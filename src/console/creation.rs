// Character creation flow

use super::Console;
use crate::game::{
    ActionError, AVAILABLE_BACKGROUNDS, AVAILABLE_SPIRIT_SOULS, CUSTOM_BACKGROUND_POWER, Game,
};
use crate::oracle::ModelRef;

const MAX_NAME_CHARS: usize = 20;
const MAX_SOUL_CHARS: usize = 25;
const MAX_BACKGROUND_CHARS: usize = 150;

/// A choice made at a menu prompt
enum Pick {
    Preset(usize),
    Custom(String),
    Random,
}

fn parse_pick(input: &str, presets: usize) -> Option<Pick> {
    match input.trim() {
        "" => None,
        "r" | "R" => Some(Pick::Random),
        s => match s.parse::<usize>() {
            Ok(n) if (1..=presets).contains(&n) => Some(Pick::Preset(n - 1)),
            Ok(_) => None,
            Err(_) => Some(Pick::Custom(s.to_string())),
        },
    }
}

fn clip(s: &str, max_chars: usize) -> String {
    s.trim().chars().take(max_chars).collect()
}

impl<M: ModelRef> Console<M> {
    /// Walk the player through creation; `None` if cancelled
    pub(super) async fn create_character(&mut self) -> Option<Game> {
        println!("== Tạo Nhân Vật == (Ctrl+C để hủy)");

        let name = loop {
            let input = self.ask("Tên nhân vật: ")?;
            let name = clip(&input, MAX_NAME_CHARS);
            if !name.is_empty() {
                break name;
            }
        };

        let spirit_soul = self.choose_spirit_soul(&name).await?;
        let (background, start_power) = self.choose_background(&name, &spirit_soul).await?;

        Some(Game::new(
            name,
            spirit_soul,
            background,
            start_power,
            self.config.log_capacity(),
        ))
    }

    async fn choose_spirit_soul(&mut self, name: &str) -> Option<String> {
        println!("Chọn Võ Hồn:");
        for (i, soul) in AVAILABLE_SPIRIT_SOULS.iter().enumerate() {
            println!("  {}. {}", i + 1, soul);
        }
        println!("  (gõ tên để tự định nghĩa, `r` để AI tạo ngẫu nhiên)");

        loop {
            let input = self.ask("Võ Hồn: ")?;
            match parse_pick(&input, AVAILABLE_SPIRIT_SOULS.len()) {
                Some(Pick::Preset(i)) => return Some(AVAILABLE_SPIRIT_SOULS[i].to_string()),
                Some(Pick::Custom(s)) => return Some(clip(&s, MAX_SOUL_CHARS)),
                Some(Pick::Random) => {
                    println!("[đang tạo...]");
                    match self.oracle.random_spirit_soul(name).await {
                        Ok(Some(soul)) => {
                            println!("{}: {}", soul.name, soul.description);
                            if self.confirm("Dùng Võ Hồn này? [Y/n] ")? {
                                return Some(clip(&soul.name, MAX_SOUL_CHARS));
                            }
                        }
                        Ok(None) => println!("[lỗi] Không thể tạo Võ Hồn. Vui lòng thử lại."),
                        Err(fault) => println!("[lỗi] {}", ActionError::from(fault)),
                    }
                }
                None => println!("Lựa chọn không hợp lệ."),
            }
        }
    }

    async fn choose_background(&mut self, name: &str, spirit_soul: &str) -> Option<(String, u32)> {
        println!("Chọn xuất thân:");
        for (i, bg) in AVAILABLE_BACKGROUNDS.iter().enumerate() {
            println!(
                "  {}. {} - {} (+{} Hồn Lực)",
                i + 1,
                bg.name,
                bg.description,
                bg.start_power
            );
        }
        println!(
            "  (gõ mô tả để tự định nghĩa, `r` để AI tạo ngẫu nhiên; bắt đầu với {} Hồn Lực)",
            CUSTOM_BACKGROUND_POWER
        );

        loop {
            let input = self.ask("Xuất thân: ")?;
            match parse_pick(&input, AVAILABLE_BACKGROUNDS.len()) {
                Some(Pick::Preset(i)) => {
                    let bg = AVAILABLE_BACKGROUNDS[i];
                    return Some((bg.name.to_string(), bg.start_power));
                }
                Some(Pick::Custom(s)) => {
                    return Some((clip(&s, MAX_BACKGROUND_CHARS), CUSTOM_BACKGROUND_POWER));
                }
                Some(Pick::Random) => {
                    println!("[đang tạo...]");
                    match self.oracle.random_background(name, spirit_soul).await {
                        Ok(Some(bg)) => {
                            println!("{}", bg.background);
                            if self.confirm("Dùng xuất thân này? [Y/n] ")? {
                                return Some((
                                    clip(&bg.background, MAX_BACKGROUND_CHARS),
                                    CUSTOM_BACKGROUND_POWER,
                                ));
                            }
                        }
                        Ok(None) => println!("[lỗi] Không thể tạo xuất thân. Vui lòng thử lại."),
                        Err(fault) => println!("[lỗi] {}", ActionError::from(fault)),
                    }
                }
                None => println!("Lựa chọn không hợp lệ."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick() {
        assert!(matches!(parse_pick("2", 4), Some(Pick::Preset(1))));
        assert!(matches!(parse_pick("r", 4), Some(Pick::Random)));
        assert!(matches!(parse_pick("Hỏa Long", 4), Some(Pick::Custom(s)) if s == "Hỏa Long"));
        assert!(parse_pick("9", 4).is_none());
        assert!(parse_pick("0", 4).is_none());
        assert!(parse_pick("  ", 4).is_none());
    }

    #[test]
    fn test_clip_counts_chars() {
        assert_eq!(clip("  Đường Vũ Lân  ", 4), "Đườn");
    }
}
