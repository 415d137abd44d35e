// Oracle reply schemas and typed outcomes

use crate::rank::{RingColor, tier_label};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A reply schema the model is asked to produce
///
/// Parsing guarantees field presence and types; `into_outcome` checks the
/// rest and returns `None` for replies that cannot be used.
pub trait Reply: DeserializeOwned {
    type Outcome;

    fn into_outcome(self) -> Option<Self::Outcome>;
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A spirit ring; color is always derived from `year`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RingRecord")]
pub struct SpiritRing {
    year: u64,
    color: RingColor,
    ability: String,
}

impl SpiritRing {
    pub fn new(year: u64, ability: impl Into<String>) -> Self {
        Self {
            year,
            color: tier_label(year).color,
            ability: ability.into(),
        }
    }

    pub fn year(&self) -> u64 {
        self.year
    }

    pub fn color(&self) -> RingColor {
        self.color
    }

    pub fn ability(&self) -> &str {
        &self.ability
    }

    pub fn presentation_tag(&self) -> &'static str {
        tier_label(self.year).tag
    }
}

/// Stored form of a ring; a stored color is ignored and re-derived
#[derive(Deserialize)]
struct RingRecord {
    year: u64,
    ability: String,
}

impl From<RingRecord> for SpiritRing {
    fn from(record: RingRecord) -> Self {
        SpiritRing::new(record.year, record.ability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivationOutcome {
    pub description: String,
    pub power_gained: u32,
}

impl Reply for CultivationOutcome {
    type Outcome = Self;

    fn into_outcome(self) -> Option<Self> {
        Some(Self {
            description: non_blank(self.description)?,
            power_gained: self.power_gained,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RingReply {
    pub year: u64,
    pub ability: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HuntReply {
    pub success: bool,
    pub description: String,
    #[serde(default)]
    pub ring: Option<RingReply>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntOutcome {
    pub success: bool,
    pub description: String,
    /// Present iff `success`
    pub ring: Option<SpiritRing>,
}

impl Reply for HuntReply {
    type Outcome = HuntOutcome;

    fn into_outcome(self) -> Option<HuntOutcome> {
        let description = non_blank(self.description)?;

        if !self.success {
            return Some(HuntOutcome {
                success: false,
                description,
                ring: None,
            });
        }

        let ring = self.ring.filter(|r| r.year > 0)?;
        Some(HuntOutcome {
            success: true,
            description,
            ring: Some(SpiritRing::new(ring.year, ring.ability.trim())),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpiritSoulOutcome {
    pub name: String,
    pub description: String,
}

impl Reply for SpiritSoulOutcome {
    type Outcome = Self;

    fn into_outcome(self) -> Option<Self> {
        Some(Self {
            name: non_blank(self.name)?,
            description: non_blank(self.description)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackgroundOutcome {
    pub background: String,
}

impl Reply for BackgroundOutcome {
    type Outcome = Self;

    fn into_outcome(self) -> Option<Self> {
        Some(Self {
            background: non_blank(self.background)?,
        })
    }
}
