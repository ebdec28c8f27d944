use crate::{
    config::PlantingRegion,
    rng::SlotRng,
    types::{Growth, MAX_GROWTH},
};
use serde::{Deserialize, Serialize};

/// Where a plant sits on the field. Fixed at planting time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Uniform draw inside `region`, both bounds inclusive.
    pub fn random_in(region: &PlantingRegion, rng: &mut SlotRng) -> Self {
        Self {
            x: rng.range_inclusive(region.x_min, region.x_max),
            y: rng.range_inclusive(region.y_min, region.y_max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    growth:   Growth,
    position: Position,
}

impl Plant {
    pub fn seedling(position: Position) -> Self {
        Self::with_growth(position, 0)
    }

    /// Growth above MAX_GROWTH is clamped.
    pub fn with_growth(position: Position, growth: Growth) -> Self {
        Self {
            growth: growth.min(MAX_GROWTH),
            position,
        }
    }

    /// Restore a persisted plant as-is.
    pub(crate) fn restored(position: Position, growth: Growth) -> Self {
        Self { growth, position }
    }

    pub fn growth(&self) -> Growth {
        self.growth
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_ready(&self) -> bool {
        self.growth >= MAX_GROWTH
    }

    /// Add growth to an immature plant, stopping at MAX_GROWTH.
    /// Returns true if the plant grew.
    pub fn grow(&mut self, amount: Growth) -> bool {
        if self.is_ready() || amount == 0 {
            return false;
        }
        self.growth = self.growth.saturating_add(amount).min(MAX_GROWTH);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Position = Position { x: 0, y: 0 };

    #[test]
    fn growth_stops_at_max() {
        let mut plant = Plant::with_growth(ORIGIN, 99);
        assert!(plant.grow(2));
        assert_eq!(plant.growth(), MAX_GROWTH);
        assert!(!plant.grow(1));
        assert_eq!(plant.growth(), MAX_GROWTH);
    }

    #[test]
    fn ready_exactly_at_max() {
        assert!(!Plant::with_growth(ORIGIN, 99).is_ready());
        assert!(Plant::with_growth(ORIGIN, 100).is_ready());
        assert!(Plant::with_growth(ORIGIN, 250).is_ready());
    }

    #[test]
    fn random_positions_stay_in_region() {
        let region = PlantingRegion::default();
        let mut rng = SlotRng::new(11, 0);
        for _ in 0..500 {
            let p = Position::random_in(&region, &mut rng);
            assert!(region.contains(p.x, p.y), "{p:?} outside {region:?}");
        }
    }
}
