// Prompt module - renders model instructions for each game action
//
// Every rendering is a pure function of its inputs.

pub mod templates;

pub use templates::SYSTEM_INSTRUCTION;

/// Inclusive bounds for cultivation power gain
pub const CULTIVATION_GAIN: (u32, u32) = (1, 3);

/// A game action that needs the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Cultivate {
        name: String,
        power: u32,
    },
    Hunt {
        name: String,
        power: u32,
        ring_slot: u32,
    },
    RandomSpiritSoul {
        name: String,
    },
    RandomBackground {
        name: String,
        spirit_soul: String,
    },
}

impl Action {
    /// Short identifier for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Cultivate { .. } => "cultivate",
            Action::Hunt { .. } => "hunt",
            Action::RandomSpiritSoul { .. } => "random_spirit_soul",
            Action::RandomBackground { .. } => "random_background",
        }
    }

    /// Sampling temperature; creative actions run hotter
    pub fn temperature(&self) -> f32 {
        match self {
            Action::Cultivate { .. } => 0.9,
            Action::Hunt { .. } => 0.8,
            Action::RandomBackground { .. } => 1.0,
            Action::RandomSpiritSoul { .. } => 1.2,
        }
    }

    /// User prompt text
    pub fn prompt(&self) -> String {
        match self {
            Action::Cultivate { name, power } => templates::cultivation(name, *power),
            Action::Hunt {
                name,
                power,
                ring_slot,
            } => templates::hunt(name, *power, *ring_slot),
            Action::RandomSpiritSoul { name } => templates::spirit_soul(name),
            Action::RandomBackground { name, spirit_soul } => {
                templates::background(name, spirit_soul)
            }
        }
    }
}

/// Tenure range a hunt for `ring_slot` may yield: `[10^(slot+1), 5 * 10^(slot+1)]`
pub fn hunt_year_range(ring_slot: u32) -> (u64, u64) {
    let min = 10u64.saturating_pow(ring_slot.saturating_add(1));
    (min, min.saturating_mul(5))
}
