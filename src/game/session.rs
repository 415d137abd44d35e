// Session - folds oracle outcomes into the running game

use super::error::ActionError;
use super::types::{Game, MAX_RINGS};
use crate::oracle::{CultivationOutcome, Fault, HuntOutcome, ModelRef, Oracle};
use std::sync::Arc;
use tracing::{info, warn};

/// In-world lines logged when an action produced nothing
struct Fallbacks {
    invalid: &'static str,
    rate_limited: &'static str,
    transient: &'static str,
}

const CULTIVATION_FALLBACKS: Fallbacks = Fallbacks {
    invalid: "Minh Tưởng thất bại, dường như có một nút thắt trong kinh mạch.",
    rate_limited: "Tu luyện quá dồn dập khiến Hồn Lực trở nên bất ổn. Bạn buộc phải dừng lại điều tức.",
    transient: "Một luồng năng lượng hỗn loạn từ bên ngoài làm gián đoạn buổi tu luyện.",
};

const HUNT_FALLBACKS: Fallbacks = Fallbacks {
    invalid: "Bạn cảm thấy nguy hiểm rình rập trong rừng và quyết định không tiến sâu hơn.",
    rate_limited: "Sự vội vàng của bạn kinh động những Hồn Thú hùng mạnh. Bạn buộc phải rút lui để bảo toàn tính mạng.",
    transient: "Sương mù dày đặc bất ngờ bao phủ khu rừng, bạn quyết định quay về an toàn.",
};

pub const SAVED_MESSAGE: &str = "Đã lưu tiến trình của bạn.";

impl Game {
    /// Log the fallback line for a failed action and map it to the player notice
    fn record_failure(&mut self, fault: Option<Fault>, lines: &Fallbacks) -> ActionError {
        let line = match &fault {
            None => Some(lines.invalid),
            Some(Fault::RateLimited(_)) => Some(lines.rate_limited),
            Some(Fault::Transient(_)) => Some(lines.transient),
            Some(Fault::Unconfigured) => None,
        };
        let err = fault.map_or(ActionError::InvalidReply, ActionError::from);

        if let Some(line) = line {
            self.events.push(line);
        }
        err
    }

    pub fn apply_cultivation(
        &mut self,
        result: Result<Option<CultivationOutcome>, Fault>,
    ) -> Result<u32, ActionError> {
        match result {
            Ok(Some(outcome)) => {
                let player = &mut self.player;
                player.spirit_power = player.spirit_power.saturating_add(outcome.power_gained);
                self.events.push(outcome.description);

                info!(
                    gained = outcome.power_gained,
                    power = self.player.spirit_power,
                    "cultivation applied"
                );
                Ok(outcome.power_gained)
            }
            Ok(None) => Err(self.record_failure(None, &CULTIVATION_FALLBACKS)),
            Err(fault) => Err(self.record_failure(Some(fault), &CULTIVATION_FALLBACKS)),
        }
    }

    /// Returns whether a ring was gained
    pub fn apply_hunt(
        &mut self,
        result: Result<Option<HuntOutcome>, Fault>,
    ) -> Result<bool, ActionError> {
        match result {
            Ok(Some(outcome)) => {
                self.events.push(outcome.description);

                match outcome.ring {
                    Some(ring) if outcome.success => {
                        info!(year = ring.year(), color = %ring.color(), "ring acquired");
                        let player = &mut self.player;
                        player.spirit_rings.push(ring);
                        player.spirit_power = player.spirit_power.saturating_add(1);
                        Ok(true)
                    }
                    _ => Ok(false),
                }
            }
            Ok(None) => Err(self.record_failure(None, &HUNT_FALLBACKS)),
            Err(fault) => Err(self.record_failure(Some(fault), &HUNT_FALLBACKS)),
        }
    }

    /// Check the hunt precondition
    pub fn check_hunt(&self) -> Result<(), ActionError> {
        let player = &self.player;
        if player.spirit_rings.len() >= MAX_RINGS {
            return Err(ActionError::RingsFull(MAX_RINGS));
        }
        if !player.can_hunt() {
            return Err(ActionError::HuntLocked {
                required: player.hunt_threshold(),
            });
        }
        Ok(())
    }
}

/// A running game bound to an oracle
pub struct Session<M: ModelRef> {
    oracle: Arc<Oracle<M>>,
    game: Game,
}

impl<M: ModelRef> Session<M> {
    pub fn new(oracle: Arc<Oracle<M>>, game: Game) -> Self {
        Self { oracle, game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub async fn cultivate(&mut self) -> Result<u32, ActionError> {
        let player = &self.game.player;
        let result = self
            .oracle
            .cultivate(&player.name, player.spirit_power)
            .await;
        self.game.apply_cultivation(result)
    }

    pub async fn hunt(&mut self) -> Result<bool, ActionError> {
        if let Err(e) = self.game.check_hunt() {
            warn!(error = %e, "hunt refused");
            return Err(e);
        }

        let player = &self.game.player;
        let result = self
            .oracle
            .hunt(&player.name, player.spirit_power, player.next_ring_slot())
            .await;
        self.game.apply_hunt(result)
    }

    /// Record the save in the log; the caller writes the snapshot
    pub fn mark_saved(&mut self) {
        self.game.events.push(SAVED_MESSAGE);
    }
}
