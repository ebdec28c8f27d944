//! Achievements: one-time flags awarded the first time a milestone is met.
//!
//! Definitions are static. Awarded identifiers are stored by name in the
//! save file, so an id must never change once shipped.

use crate::state::GameState;

/// Static description of a single achievement.
pub struct AchievementDef {
    pub id:          &'static str,
    pub description: &'static str,
    /// Checked after every frame until the achievement is awarded.
    pub condition:   fn(&GameState) -> bool,
}

pub const PLANT_MASTER: &str = "Plant Master";

/// Plants needed on the field at once for Plant Master.
pub const PLANT_MASTER_THRESHOLD: usize = 10;

pub const ACHIEVEMENTS: &[AchievementDef] = &[AchievementDef {
    id:          PLANT_MASTER,
    description: "Have 10 plants on the field at once",
    condition:   |state| state.plants().len() >= PLANT_MASTER_THRESHOLD,
}];

/// Player-facing description of a known achievement id.
pub fn describe(id: &str) -> Option<&'static str> {
    ACHIEVEMENTS.iter().find(|a| a.id == id).map(|a| a.description)
}

/// Awarded achievement ids in the order they were earned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Achievements {
    earned: Vec<String>,
}

impl Achievements {
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut achievements = Self::default();
        for id in ids {
            achievements.award(&id);
        }
        achievements
    }

    pub fn contains(&self, id: &str) -> bool {
        self.earned.iter().any(|e| e == id)
    }

    /// Record `id`. Returns false if it was already earned.
    pub fn award(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.earned.push(id.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.earned.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_is_idempotent() {
        let mut a = Achievements::default();
        assert!(a.award(PLANT_MASTER));
        assert!(!a.award(PLANT_MASTER));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn duplicate_ids_collapse_on_restore() {
        let a = Achievements::from_ids(vec![PLANT_MASTER.into(), PLANT_MASTER.into()]);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![PLANT_MASTER]);
    }

    #[test]
    fn describe_finds_known_ids_only() {
        assert_eq!(describe(PLANT_MASTER), Some("Have 10 plants on the field at once"));
        assert_eq!(describe("Unknown"), None);
    }

    #[test]
    fn achievement_ids_are_unique() {
        for (i, a) in ACHIEVEMENTS.iter().enumerate() {
            assert!(ACHIEVEMENTS[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
    }
}
