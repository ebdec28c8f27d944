//! Popup and sound cues for the presentation shell.
//!
//! Only one popup is visible at a time; a newer one replaces the current
//! one and restarts its timer.

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Planted,
    Harvested,
    Upgraded,
    /// Celebrated with the planted-style popup.
    Achievement { id: String },
}

impl Notification {
    pub fn message(&self) -> String {
        match self {
            Self::Planted => "Weed Planted!".to_string(),
            Self::Harvested => "Weed Harvested!".to_string(),
            Self::Upgraded => "Farm Upgraded!".to_string(),
            Self::Achievement { id } => format!("Achievement Unlocked: {id}!"),
        }
    }

    /// Sound effect name, if the shell should play one.
    pub fn sound_cue(&self) -> Option<&'static str> {
        match self {
            Self::Planted => Some("plant"),
            Self::Harvested => Some("harvest"),
            Self::Upgraded => Some("upgrade"),
            Self::Achievement { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActivePopup {
    notification: Notification,
    shown_at:     Timestamp,
}

/// Tracks the popup currently on screen.
#[derive(Debug, Clone)]
pub struct NotificationBoard {
    duration_secs: f64,
    active:        Option<ActivePopup>,
}

impl NotificationBoard {
    pub fn new(duration_secs: f64) -> Self {
        Self { duration_secs, active: None }
    }

    pub fn show(&mut self, notification: Notification, now: Timestamp) {
        self.active = Some(ActivePopup { notification, shown_at: now });
    }

    /// The popup to draw at `now`. Expired popups are cleared.
    pub fn current(&mut self, now: Timestamp) -> Option<&Notification> {
        let expired = self
            .active
            .as_ref()
            .is_some_and(|p| now - p.shown_at > self.duration_secs);
        if expired {
            self.active = None;
        }
        self.active.as_ref().map(|p| &p.notification)
    }
}
