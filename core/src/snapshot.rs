//! Save-file serialization: full game state to/from JSON.
//!
//! The field names below are the on-disk format. Renaming one breaks every
//! existing save, so add fields with #[serde(default)] instead.

use crate::{
    achievement::Achievements,
    config::StartingEconomy,
    day_cycle::DayCycle,
    economy::Economy,
    error::{SimError, SimResult},
    plant::{Plant, Position},
    state::GameState,
    types::{Growth, Money, Timestamp},
    weather::Weather,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlant {
    pub growth: Growth,
    pub x:      i32,
    pub y:      i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveFile {
    pub money:          Money,
    pub weed_plants:    Vec<SavedPlant>,
    pub plant_cost:     Money,
    pub harvest_amount: Money,
    pub sell_price:     Money,
    pub upgrade_cost:   Money,
    pub upgrade_level:  u32,
    pub day_time:       bool,
    pub day_start_time: Timestamp,
    pub weather:        Weather,
    pub achievements:   Vec<String>,
}

impl SaveFile {
    pub fn capture(state: &GameState) -> Self {
        Self {
            money: state.money,
            weed_plants: state
                .plants()
                .iter()
                .map(|p| SavedPlant {
                    growth: p.growth(),
                    x:      p.position().x,
                    y:      p.position().y,
                })
                .collect(),
            plant_cost:     state.economy.plant_cost,
            harvest_amount: state.economy.harvest_amount,
            sell_price:     state.economy.sell_price,
            upgrade_cost:   state.economy.upgrade_cost,
            upgrade_level:  state.economy.upgrade_level,
            day_time:       state.day_cycle.day_time,
            day_start_time: state.day_cycle.day_start,
            weather:        state.weather,
            achievements:   state.achievements.iter().map(str::to_string).collect(),
        }
    }

    pub fn into_state(self) -> GameState {
        let plants = self
            .weed_plants
            .into_iter()
            .map(|p| Plant::restored(Position { x: p.x, y: p.y }, p.growth))
            .collect();
        GameState::restore(
            self.money,
            plants,
            Economy {
                plant_cost:     self.plant_cost,
                harvest_amount: self.harvest_amount,
                sell_price:     self.sell_price,
                upgrade_cost:   self.upgrade_cost,
                upgrade_level:  self.upgrade_level,
            },
            DayCycle {
                day_time:  self.day_time,
                day_start: self.day_start_time,
            },
            self.weather,
            Achievements::from_ids(self.achievements),
        )
    }
}

/// Serialize `state` into a save blob.
pub fn save(state: &GameState) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(&SaveFile::capture(state))?)
}

/// Parse a save blob, reporting why it could not be used.
pub fn try_load(blob: &str) -> SimResult<GameState> {
    let file: SaveFile = serde_json::from_str(blob).map_err(|e| SimError::CorruptSave {
        reason: e.to_string(),
    })?;
    if !file.day_start_time.is_finite() {
        return Err(SimError::CorruptSave {
            reason: format!("day_start_time is not a finite number: {}", file.day_start_time),
        });
    }
    Ok(file.into_state())
}

/// Parse a save blob. Anything unusable yields a fresh game starting at `now`.
pub fn load(blob: &str, starting: &StartingEconomy, now: Timestamp) -> GameState {
    match try_load(blob) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Error loading save file ({e}). Starting a new game.");
            GameState::fresh(starting, now)
        }
    }
}
