// Oracle - turns game actions into model calls and typed outcomes

use super::error::{Fault, classify_failure};
use super::types::{
    BackgroundOutcome, CultivationOutcome, HuntOutcome, HuntReply, Reply, SpiritSoulOutcome,
};
use crate::brain::{Brain, BrainError, GenerateRequest, RequestBuilder};
use crate::keys::{Credential, SharedPool};
use crate::parse::parse_reply;
use crate::prompt::{Action, SYSTEM_INSTRUCTION};
use std::sync::PoisonError;
use tracing::{info, warn};

/// Trait for the remote model (for testing)
#[async_trait::async_trait]
pub trait ModelRef: Send + Sync {
    /// One remote call; the error is the transport's message
    async fn generate(&self, api_key: &str, request: GenerateRequest) -> Result<String, String>;
    fn model(&self) -> &str;
    fn max_output_tokens(&self) -> u32;
}

#[async_trait::async_trait]
impl ModelRef for Brain {
    async fn generate(&self, api_key: &str, request: GenerateRequest) -> Result<String, String> {
        Brain::generate(self, api_key, &request)
            .await
            .map_err(failure_message)
    }

    fn model(&self) -> &str {
        Brain::model(self)
    }

    fn max_output_tokens(&self) -> u32 {
        Brain::max_output_tokens(self)
    }
}

/// The part of a transport error worth classifying; request URLs are left out
fn failure_message(err: BrainError) -> String {
    match err {
        BrainError::NetworkError(e) => BrainError::NetworkError(e.without_url()).to_string(),
        other => other.to_string(),
    }
}

/// Request orchestrator
///
/// `Ok(None)` means the model answered but the reply was unusable; the
/// action should be treated as having had no effect. No call is retried.
pub struct Oracle<M: ModelRef> {
    model: M,
    pool: SharedPool,
}

impl<M: ModelRef> Oracle<M> {
    pub fn new(model: M, pool: SharedPool) -> Self {
        Self { model, pool }
    }

    /// Handle to the credential pool this oracle rotates through
    pub fn pool(&self) -> &SharedPool {
        &self.pool
    }

    pub async fn cultivate(
        &self,
        name: &str,
        power: u32,
    ) -> Result<Option<CultivationOutcome>, Fault> {
        self.ask::<CultivationOutcome>(Action::Cultivate {
            name: name.to_string(),
            power,
        })
        .await
    }

    pub async fn hunt(
        &self,
        name: &str,
        power: u32,
        ring_slot: u32,
    ) -> Result<Option<HuntOutcome>, Fault> {
        self.ask::<HuntReply>(Action::Hunt {
            name: name.to_string(),
            power,
            ring_slot,
        })
        .await
    }

    pub async fn random_spirit_soul(
        &self,
        name: &str,
    ) -> Result<Option<SpiritSoulOutcome>, Fault> {
        self.ask::<SpiritSoulOutcome>(Action::RandomSpiritSoul {
            name: name.to_string(),
        })
        .await
    }

    pub async fn random_background(
        &self,
        name: &str,
        spirit_soul: &str,
    ) -> Result<Option<BackgroundOutcome>, Fault> {
        self.ask::<BackgroundOutcome>(Action::RandomBackground {
            name: name.to_string(),
            spirit_soul: spirit_soul.to_string(),
        })
        .await
    }

    fn next_credential(&self) -> Result<Credential, Fault> {
        // Guard is released before any await
        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(pool.next()?)
    }

    fn build_request(&self, action: &Action) -> Result<GenerateRequest, Fault> {
        RequestBuilder::new(self.model.model())
            .system(SYSTEM_INSTRUCTION)
            .user_text(action.prompt())
            .temperature(action.temperature())
            .max_output_tokens(self.model.max_output_tokens())
            .json_output(true)
            .build()
            .map_err(|e| Fault::Transient(e.to_string()))
    }

    async fn ask<R: Reply>(&self, action: Action) -> Result<Option<R::Outcome>, Fault> {
        let kind = action.kind();

        let credential = self.next_credential().inspect_err(|_| {
            warn!(action = kind, "no API key configured, call skipped");
        })?;

        let request = self.build_request(&action)?;

        info!(action = kind, temperature = action.temperature(), "calling model");

        let raw = self
            .model
            .generate(credential.as_str(), request)
            .await
            .map_err(|message| {
                let fault = classify_failure(&message);
                warn!(action = kind, fault = %fault, "model call failed");
                fault
            })?;

        let outcome = parse_reply::<R>(&raw).and_then(R::into_outcome);
        if outcome.is_none() {
            warn!(action = kind, "model reply rejected");
        }

        Ok(outcome)
    }
}
