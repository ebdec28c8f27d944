use crate::types::{Growth, Money};
use serde::{Deserialize, Serialize};

/// Economy values a fresh game starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StartingEconomy {
    pub money:          Money,
    pub plant_cost:     Money,
    pub harvest_amount: Money,
    pub sell_price:     Money,
    pub upgrade_cost:   Money,
    pub upgrade_level:  u32,
}

impl Default for StartingEconomy {
    fn default() -> Self {
        Self {
            money:          100,
            plant_cost:     10,
            harvest_amount: 5,
            sell_price:     20,
            upgrade_cost:   200,
            upgrade_level:  1,
        }
    }
}

/// What one successful farm upgrade changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpgradeRules {
    /// Subtracted from plant cost. No floor is applied.
    pub plant_cost_discount: Money,
    pub harvest_bonus:       Money,
    pub sell_price_bonus:    Money,
    /// Next upgrade costs this many times the last one.
    pub cost_multiplier:     Money,
}

impl Default for UpgradeRules {
    fn default() -> Self {
        Self {
            plant_cost_discount: 1,
            harvest_bonus:       2,
            sell_price_bonus:    5,
            cost_multiplier:     2,
        }
    }
}

/// Screen region new plants are dropped into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlantingRegion {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl PlantingRegion {
    /// The reference layout: x in [50, width-100], y in [300, height-100].
    pub fn for_screen(width: i32, height: i32) -> Self {
        Self {
            x_min: 50,
            x_max: width - 100,
            y_min: 300,
            y_max: height - 100,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

impl Default for PlantingRegion {
    fn default() -> Self {
        Self::for_screen(800, 600)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub starting:            StartingEconomy,
    pub upgrade:             UpgradeRules,
    pub planting_region:     PlantingRegion,
    /// Seconds each day or night phase lasts.
    pub day_duration_secs:   f64,
    /// Fixed tick cadence used by the frame accumulator.
    pub ticks_per_second:    u32,
    pub growth_per_tick:     Growth,
    /// One-off growth granted to immature plants when the weather turns rainy.
    pub rain_boost:          Growth,
    /// How long a popup stays on screen.
    pub popup_duration_secs: f64,
    /// Enables the privileged plant/money injection commands.
    pub dev_mode:            bool,
    pub dev_plant_batch:     u32,
    pub dev_money_grant:     Money,
    pub save_path:           String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting:            StartingEconomy::default(),
            upgrade:             UpgradeRules::default(),
            planting_region:     PlantingRegion::default(),
            day_duration_secs:   30.0,
            ticks_per_second:    30,
            growth_per_tick:     1,
            rain_boost:          2,
            popup_duration_secs: 1.0,
            dev_mode:            false,
            dev_plant_batch:     10,
            dev_money_grant:     1_000_000,
            save_path:           "game_save.json".into(),
        }
    }
}

impl GameConfig {
    /// Load overrides from a JSON file. Missing fields keep their defaults.
    /// In tests, use GameConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GameConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reference values with developer commands enabled.
    pub fn default_test() -> Self {
        Self {
            dev_mode: true,
            ..Self::default()
        }
    }

    /// Seconds covered by one fixed tick.
    pub fn frame_duration(&self) -> f64 {
        1.0 / f64::from(self.ticks_per_second)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ticks_per_second == 0 {
            anyhow::bail!("ticks_per_second must be > 0");
        }
        if self.day_duration_secs <= 0.0 {
            anyhow::bail!("day_duration_secs must be > 0, got {}", self.day_duration_secs);
        }
        let r = &self.planting_region;
        if r.x_min > r.x_max || r.y_min > r.y_max {
            anyhow::bail!("planting_region is empty: {r:?}");
        }
        Ok(())
    }
}
