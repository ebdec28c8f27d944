use crate::types::{Growth, Money};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Variants may be added, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Farm actions ──────────────────────────────
    Plant,
    Harvest,
    /// Harvest everything ready and sell it.
    Sell,
    Upgrade,

    // ── Developer panel (requires dev_mode) ───────
    AddPlants { count: u32, growth: Growth },
    AddMoney { amount: Money },
}

impl PlayerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Harvest => "harvest",
            Self::Sell => "sell",
            Self::Upgrade => "upgrade",
            Self::AddPlants { .. } => "add_plants",
            Self::AddMoney { .. } => "add_money",
        }
    }

    /// Commands only the developer panel may issue.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::AddPlants { .. } | Self::AddMoney { .. })
    }
}
