// Console module - line-oriented front end over the game session
//
// One command is handled at a time; the next prompt is not shown until the
// pending model call has finished.

pub mod commands;
mod creation;
pub mod render;

use crate::game::{GameConfig, GameError, Session, Settings, storage};
use crate::oracle::{ModelRef, Oracle};
use commands::{Command, HELP};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError};
use tracing::{error, info, warn};

pub struct Console<M: ModelRef> {
    oracle: Arc<Oracle<M>>,
    config: GameConfig,
    session: Option<Session<M>>,
    editor: Editor<(), FileHistory>,
    history_file: PathBuf,
    colored: bool,
}

impl<M: ModelRef> Console<M> {
    pub fn new(
        oracle: Arc<Oracle<M>>,
        config: GameConfig,
        history_file: PathBuf,
    ) -> rustyline::Result<Self> {
        if let Some(parent) = history_file.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(error = %e, "failed to create history directory");
        }

        let mut editor: Editor<(), FileHistory> = Editor::new()?;
        if history_file.exists()
            && let Err(e) = editor.load_history(&history_file)
        {
            warn!(error = %e, "failed to load history");
        }

        Ok(Self {
            oracle,
            config,
            session: None,
            editor,
            history_file,
            colored: io::stdout().is_terminal(),
        })
    }

    /// Prompt for a line; `None` on Ctrl+C / Ctrl+D
    fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                error!(error = %e, "readline error");
                None
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Option<bool> {
        let answer = self.ask(prompt)?;
        Some(!matches!(answer.trim().to_lowercase().as_str(), "n" | "no" | "không"))
    }

    fn waiting(&self) {
        print!("[đang chờ AI...]");
        let _ = io::stdout().flush();
    }

    fn print_latest(&self) {
        print!("\r");
        if let Some(event) = self.session.as_ref().and_then(|s| s.game().events.latest()) {
            println!("{}", event.message);
        }
    }

    pub async fn run(mut self) -> io::Result<()> {
        println!("soulring v{}", env!("CARGO_PKG_VERSION"));
        if self.pool_is_empty() {
            println!("Chưa có khóa API. Dùng `keys k1,k2,...` để cấu hình.");
        }
        if storage::has_save(&self.config.save_path()) {
            println!("Có bản lưu. Gõ `continue` để tiếp tục hoặc `new` để bắt đầu lại.");
        } else {
            println!("Gõ `new` để tạo nhân vật, `help` để xem lệnh.");
        }

        loop {
            let line = match self.editor.readline("> ") {
                Ok(line) => line,
                // Ctrl+C - cancel current input, continue
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("[lỗi] {}", e);
                    break;
                }
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input);

            match Command::parse(input) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(msg) => println!("{}", msg),
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_file) {
            warn!(error = %e, "failed to save history");
        }

        println!("Tạm biệt!");
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::New => self.new_game().await,
            Command::Continue => self.continue_game(),
            Command::Cultivate => self.cultivate().await,
            Command::Hunt => self.hunt().await,
            Command::Status => match &self.session {
                Some(s) => println!("{}", render::status(&s.game().player, self.colored)),
                None => println!("Chưa có nhân vật."),
            },
            Command::Log(n) => match &self.session {
                Some(s) => println!("{}", render::log(&s.game().events, n)),
                None => println!("Chưa có nhân vật."),
            },
            Command::Save => self.save(),
            Command::Keys(keys) => self.keys(keys),
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
    }

    async fn new_game(&mut self) {
        if self.session.is_some()
            && !self
                .confirm("Bắt đầu hành trình mới? Tiến trình chưa lưu sẽ mất. [Y/n] ")
                .unwrap_or(false)
        {
            return;
        }

        let Some(game) = self.create_character().await else {
            println!("Đã hủy tạo nhân vật.");
            return;
        };

        if let Err(e) = storage::remove_save(&self.config.save_path()) {
            warn!(error = %e, "failed to remove old save");
        }

        info!(player = %game.player.name, "new game started");
        self.session = Some(Session::new(self.oracle.clone(), game));
        self.print_latest();
    }

    fn continue_game(&mut self) {
        let path = self.config.save_path();
        match storage::load_or_discard(&path, self.config.log_capacity()) {
            Ok(Some(game)) => {
                println!("Chào mừng trở lại, {}.", game.player.name);
                self.session = Some(Session::new(self.oracle.clone(), game));
                self.print_latest();
            }
            Ok(None) => println!("Không có bản lưu."),
            Err(e @ GameError::Json(_)) => {
                error!(error = %e, "failed to load save");
                println!("[lỗi] Bản lưu bị hỏng và đã bị xóa: {}", e);
            }
            Err(e) => {
                error!(error = %e, "failed to load save");
                println!("[lỗi] Không thể đọc bản lưu: {}", e);
            }
        }
    }

    async fn cultivate(&mut self) {
        if self.session.is_none() {
            println!("Chưa có nhân vật.");
            return;
        }

        self.waiting();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.cultivate().await;
        self.print_latest();
        match result {
            Ok(gained) => println!("(+{} Hồn Lực)", gained),
            Err(e) => println!("[lỗi] {}", e),
        }
    }

    async fn hunt(&mut self) {
        let Some(session) = self.session.as_ref() else {
            println!("Chưa có nhân vật.");
            return;
        };

        if let Err(e) = session.game().check_hunt() {
            println!("{}", e);
            return;
        }

        self.waiting();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.hunt().await;
        self.print_latest();

        match result {
            Ok(true) => {
                if let Some(ring) = self
                    .session
                    .as_ref()
                    .and_then(|s| s.game().player.spirit_rings.last())
                {
                    println!(
                        "Nhận được Hồn Hoàn {} - {}",
                        render::ring_badge(ring, self.colored),
                        ring.ability()
                    );
                }
            }
            Ok(false) => {}
            Err(e) => println!("[lỗi] {}", e),
        }
    }

    fn save(&mut self) {
        let Some(session) = self.session.as_mut() else {
            println!("Chưa có nhân vật.");
            return;
        };

        session.mark_saved();
        match storage::save_game(&self.config.save_path(), session.game()) {
            Ok(()) => println!("{}", crate::game::session::SAVED_MESSAGE),
            Err(e) => {
                error!(error = %e, "save failed");
                println!("[lỗi] Không thể lưu: {}", e);
            }
        }
    }

    fn pool_is_empty(&self) -> bool {
        self.oracle
            .pool()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn keys(&mut self, keys: Vec<String>) {
        if keys.is_empty() {
            let pool = self
                .oracle
                .pool()
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if pool.is_empty() {
                println!("Chưa có khóa API.");
            }
            for (i, credential) in pool.credentials().iter().enumerate() {
                println!("  {}. {}", i + 1, credential.masked());
            }
            return;
        }

        let count = {
            let mut pool = self
                .oracle
                .pool()
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            pool.configure(&keys);
            pool.len()
        };

        let settings = Settings { api_keys: keys };
        if let Err(e) = storage::save_settings(&self.config.settings_path(), &settings) {
            error!(error = %e, "failed to persist settings");
            println!("[lỗi] Không thể lưu cài đặt: {}", e);
        }

        println!("Đã cấu hình {} khóa API.", count);
    }
}
