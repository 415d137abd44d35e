// Oracle module - request orchestration between game actions and the model

pub mod client;
pub mod error;
pub mod types;

pub use client::{ModelRef, Oracle};
pub use error::{Fault, classify_failure};
pub use types::{
    BackgroundOutcome, CultivationOutcome, HuntOutcome, SpiritRing, SpiritSoulOutcome,
};
