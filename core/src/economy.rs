//! Farm economics: what planting costs, what a harvest yields and sells for,
//! and how upgrades move those numbers.

use crate::{
    config::{StartingEconomy, UpgradeRules},
    types::Money,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    pub plant_cost:     Money,
    /// Units produced by one ready plant.
    pub harvest_amount: Money,
    /// Money earned per harvested unit.
    pub sell_price:     Money,
    pub upgrade_cost:   Money,
    pub upgrade_level:  u32,
}

impl Economy {
    pub fn from_starting(starting: &StartingEconomy) -> Self {
        Self {
            plant_cost:     starting.plant_cost,
            harvest_amount: starting.harvest_amount,
            sell_price:     starting.sell_price,
            upgrade_cost:   starting.upgrade_cost,
            upgrade_level:  starting.upgrade_level,
        }
    }

    /// Apply one upgrade's parameter changes. Payment is the caller's job.
    pub(crate) fn apply_upgrade(&mut self, rules: &UpgradeRules) {
        self.upgrade_level = self.upgrade_level.saturating_add(1);
        self.plant_cost = self.plant_cost.saturating_sub(rules.plant_cost_discount);
        self.harvest_amount = self.harvest_amount.saturating_add(rules.harvest_bonus);
        self.sell_price = self.sell_price.saturating_add(rules.sell_price_bonus);
        self.upgrade_cost = self.upgrade_cost.saturating_mul(rules.cost_multiplier);
    }

    /// Revenue from `ready_plants` plants.
    pub fn harvest_yield(&self, ready_plants: usize) -> Money {
        Money::try_from(ready_plants)
            .unwrap_or(Money::MAX)
            .saturating_mul(self.harvest_amount)
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::from_starting(&StartingEconomy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_cost_has_no_floor() {
        let mut economy = Economy::default();
        let rules = UpgradeRules::default();
        for _ in 0..12 {
            economy.apply_upgrade(&rules);
        }
        assert_eq!(economy.plant_cost, -2);
        assert_eq!(economy.upgrade_level, 13);
    }

    #[test]
    fn huge_yield_saturates() {
        let economy = Economy { harvest_amount: Money::MAX / 2, ..Economy::default() };
        assert_eq!(economy.harvest_yield(3), Money::MAX);
    }
}
