// Console command parsing

use crate::keys::split_keys;

/// Default number of log entries shown by `log`
pub const DEFAULT_LOG_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Continue,
    Cultivate,
    Hunt,
    Status,
    Log(usize),
    Save,
    /// Replace the key set; empty shows the current keys
    Keys(Vec<String>),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(h, r)| (h, r.trim()))
            .unwrap_or((line, ""));

        let command = match head.to_lowercase().as_str() {
            "new" | "n" => Command::New,
            "continue" | "load" => Command::Continue,
            "cultivate" | "c" => Command::Cultivate,
            "hunt" | "h" => Command::Hunt,
            "status" | "s" => Command::Status,
            "log" | "l" => {
                let count = if rest.is_empty() {
                    DEFAULT_LOG_LINES
                } else {
                    rest.parse()
                        .map_err(|_| format!("Số dòng không hợp lệ: {}", rest))?
                };
                Command::Log(count)
            }
            "save" => Command::Save,
            "keys" => Command::Keys(split_keys(rest)),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("Lệnh không rõ: {} (gõ `help`)", other)),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Lệnh:
  new              tạo nhân vật mới
  continue         tiếp tục từ bản lưu
  cultivate | c    Minh Tưởng tu luyện
  hunt | h         săn Hồn Thú lấy Hồn Hoàn
  status | s       xem thông tin nhân vật
  log [n]          xem n sự kiện gần nhất
  save             lưu tiến trình
  keys k1,k2,...   thay toàn bộ khóa API (không tham số: xem khóa hiện tại)
  help             trợ giúp
  quit             thoát";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(Command::parse("c"), Ok(Command::Cultivate));
        assert_eq!(Command::parse("  HUNT "), Ok(Command::Hunt));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_log_count() {
        assert_eq!(Command::parse("log"), Ok(Command::Log(DEFAULT_LOG_LINES)));
        assert_eq!(Command::parse("log 3"), Ok(Command::Log(3)));
        assert!(Command::parse("log many").is_err());
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            Command::parse("keys a, b ,c"),
            Ok(Command::Keys(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert_eq!(Command::parse("keys"), Ok(Command::Keys(vec![])));
    }

    #[test]
    fn test_unknown() {
        assert!(Command::parse("fly").is_err());
    }
}
