//! The game state aggregate and the operations that mutate it.
//!
//! RULE: GameState holds no handles to rendering, audio, or files.
//! Every operation is total: it either applies its full effect or
//! leaves the state untouched. Insufficient funds is a no-op, not an error.

use crate::{
    achievement::Achievements,
    config::{GameConfig, PlantingRegion, StartingEconomy, UpgradeRules},
    day_cycle::DayCycle,
    economy::Economy,
    plant::{Plant, Position},
    rng::SlotRng,
    types::{Growth, Money, Timestamp},
    weather::Weather,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub money:        Money,
    plants:           Vec<Plant>,
    pub economy:      Economy,
    pub day_cycle:    DayCycle,
    pub weather:      Weather,
    pub achievements: Achievements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantOutcome {
    pub position: Position,
    pub cost:     Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarvestOutcome {
    pub plants: usize,
    pub amount: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleOutcome {
    pub harvest:  HarvestOutcome,
    pub earnings: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOutcome {
    pub cost_paid: Money,
    pub new_level: u32,
}

impl GameState {
    /// A brand-new game whose first day begins at `now`.
    pub fn fresh(starting: &StartingEconomy, now: Timestamp) -> Self {
        Self {
            money:        starting.money,
            plants:       Vec::new(),
            economy:      Economy::from_starting(starting),
            day_cycle:    DayCycle::starting_at(now),
            weather:      Weather::Sunny,
            achievements: Achievements::default(),
        }
    }

    pub fn new_game(config: &GameConfig, now: Timestamp) -> Self {
        Self::fresh(&config.starting, now)
    }

    /// Reassemble a state from persisted parts.
    pub(crate) fn restore(
        money: Money,
        plants: Vec<Plant>,
        economy: Economy,
        day_cycle: DayCycle,
        weather: Weather,
        achievements: Achievements,
    ) -> Self {
        Self { money, plants, economy, day_cycle, weather, achievements }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn ready_count(&self) -> usize {
        self.plants.iter().filter(|p| p.is_ready()).count()
    }

    pub fn can_afford(&self, cost: Money) -> bool {
        self.money >= cost
    }

    /// Deduct `cost` if affordable. Returns whether the money was spent.
    fn spend(&mut self, cost: Money) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.money = self.money.saturating_sub(cost);
        true
    }

    /// Buy and place one seedling at a random spot in `region`.
    pub fn plant(&mut self, region: &PlantingRegion, rng: &mut SlotRng) -> Option<PlantOutcome> {
        let cost = self.economy.plant_cost;
        if !self.spend(cost) {
            log::debug!("plant: need ${cost}, have ${}", self.money);
            return None;
        }
        let position = Position::random_in(region, rng);
        self.plants.push(Plant::seedling(position));
        Some(PlantOutcome { position, cost })
    }

    /// Remove every ready plant and report the yield.
    /// Immature plants keep their order and growth.
    pub fn harvest(&mut self) -> HarvestOutcome {
        let (ready, growing): (Vec<Plant>, Vec<Plant>) =
            std::mem::take(&mut self.plants).into_iter().partition(Plant::is_ready);
        self.plants = growing;
        HarvestOutcome {
            plants: ready.len(),
            amount: self.economy.harvest_yield(ready.len()),
        }
    }

    /// Harvest, then sell everything harvested.
    pub fn sell(&mut self) -> Option<SaleOutcome> {
        let harvest = self.harvest();
        if harvest.amount <= 0 {
            return None;
        }
        let earnings = harvest.amount.saturating_mul(self.economy.sell_price);
        self.money = self.money.saturating_add(earnings);
        Some(SaleOutcome { harvest, earnings })
    }

    /// Pay for one farm upgrade and apply it.
    pub fn upgrade(&mut self, rules: &UpgradeRules) -> Option<UpgradeOutcome> {
        let cost = self.economy.upgrade_cost;
        if !self.spend(cost) {
            log::debug!("upgrade: need ${cost}, have ${}", self.money);
            return None;
        }
        self.economy.apply_upgrade(rules);
        Some(UpgradeOutcome {
            cost_paid: cost,
            new_level: self.economy.upgrade_level,
        })
    }

    /// Grow every immature plant by `amount`. Returns how many grew.
    pub fn grow_immature(&mut self, amount: Growth) -> usize {
        self.plants.iter_mut().map(|p| p.grow(amount)).filter(|grew| *grew).count()
    }

    /// Debug primitive: place `count` plants at `growth` without paying.
    pub fn add_plants(
        &mut self,
        count: u32,
        growth: Growth,
        region: &PlantingRegion,
        rng: &mut SlotRng,
    ) -> usize {
        let before = self.plants.len();
        self.plants.extend(
            (0..count).map(|_| Plant::with_growth(Position::random_in(region, rng), growth)),
        );
        self.plants.len() - before
    }

    /// Debug primitive: grant money. Negative grants are ignored.
    /// Returns the amount actually credited.
    pub fn add_money(&mut self, amount: Money) -> Money {
        let before = self.money;
        self.money = self.money.saturating_add(amount.max(0));
        self.money - before
    }
}
