//! Everything the simulation reports back to its shell.
//!
//! RULE: The core never plays sounds or draws popups. Operations return
//! events; the shell decides how to present them.

use crate::{
    notification::Notification,
    types::{Frame, Growth, Money, SessionId},
    weather::Weather,
};
use serde::{Deserialize, Serialize};

/// Every event emitted during play.
/// Variants may be added, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    // ── Player actions ─────────────────────────────
    Planted {
        frame:       Frame,
        x:           i32,
        y:           i32,
        cost:        Money,
        money_after: Money,
    },
    Harvested {
        frame:  Frame,
        plants: usize,
        amount: Money,
    },
    Sold {
        frame:       Frame,
        amount:      Money,
        earnings:    Money,
        money_after: Money,
    },
    Upgraded {
        frame:     Frame,
        level:     u32,
        cost_paid: Money,
        next_cost: Money,
    },

    // ── World ──────────────────────────────────────
    PhaseChanged {
        frame:    Frame,
        day_time: bool,
    },
    WeatherChanged {
        frame:   Frame,
        weather: Weather,
    },
    RainBoost {
        frame:          Frame,
        plants_boosted: usize,
        amount:         Growth,
    },
    AchievementUnlocked {
        frame: Frame,
        id:    String,
    },

    // ── Developer commands ─────────────────────────
    DevPlantsAdded {
        frame:  Frame,
        count:  usize,
        growth: Growth,
    },
    DevMoneyAdded {
        frame:  Frame,
        amount: Money,
    },
}

impl GameEvent {
    /// Stable name used for the event_type column of the event log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Planted { .. }             => "planted",
            Self::Harvested { .. }           => "harvested",
            Self::Sold { .. }                => "sold",
            Self::Upgraded { .. }            => "upgraded",
            Self::PhaseChanged { .. }        => "phase_changed",
            Self::WeatherChanged { .. }      => "weather_changed",
            Self::RainBoost { .. }           => "rain_boost",
            Self::AchievementUnlocked { .. } => "achievement_unlocked",
            Self::DevPlantsAdded { .. }      => "dev_plants_added",
            Self::DevMoneyAdded { .. }       => "dev_money_added",
        }
    }

    pub fn frame(&self) -> Frame {
        match self {
            Self::Planted { frame, .. }
            | Self::Harvested { frame, .. }
            | Self::Sold { frame, .. }
            | Self::Upgraded { frame, .. }
            | Self::PhaseChanged { frame, .. }
            | Self::WeatherChanged { frame, .. }
            | Self::RainBoost { frame, .. }
            | Self::AchievementUnlocked { frame, .. }
            | Self::DevPlantsAdded { frame, .. }
            | Self::DevMoneyAdded { frame, .. } => *frame,
        }
    }

    /// The popup the shell should show for this event, if any.
    /// Selling shows nothing of its own; its Harvested event already did.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Planted { .. } => Some(Notification::Planted),
            Self::Harvested { .. } => Some(Notification::Harvested),
            Self::Upgraded { .. } => Some(Notification::Upgraded),
            Self::AchievementUnlocked { id, .. } => {
                Some(Notification::Achievement { id: id.clone() })
            }
            _ => None,
        }
    }
}

/// One persisted row of the event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventLogEntry {
    pub session_id: SessionId,
    pub frame:      Frame,
    /// Subsystem name, or "player" for command results.
    pub source:     String,
    pub event_type: String,
    pub payload:    String,
}
