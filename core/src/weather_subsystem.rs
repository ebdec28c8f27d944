//! Day/night timing and weather.
//!
//! When the current phase has lasted the configured duration the phase flips,
//! the phase timer restarts at the current clock reading, and a new weather
//! condition is drawn. Arriving rain gives every immature plant a one-off
//! growth boost; it does not keep boosting while it rains.

use crate::{
    error::SimResult,
    event::GameEvent,
    rng::{RngBank, RngSlot},
    state::GameState,
    subsystem::{FrameContext, SimSubsystem},
    weather::Weather,
};

#[derive(Debug, Default)]
pub struct WeatherSubsystem;

impl WeatherSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl SimSubsystem for WeatherSubsystem {
    fn name(&self) -> &'static str { "weather" }

    fn update(
        &mut self,
        ctx: &FrameContext<'_>,
        state: &mut GameState,
        rng: &mut RngBank,
    ) -> SimResult<Vec<GameEvent>> {
        if !state.day_cycle.is_due(ctx.now, ctx.config.day_duration_secs) {
            return Ok(vec![]);
        }

        state.day_cycle.flip(ctx.now);
        state.weather = Weather::sample(rng.slot(RngSlot::Weather));

        log::debug!(
            "frame={} weather: {} begins, weather={}",
            ctx.frame,
            state.day_cycle.label(),
            state.weather
        );

        let mut events = vec![
            GameEvent::PhaseChanged {
                frame:    ctx.frame,
                day_time: state.day_cycle.day_time,
            },
            GameEvent::WeatherChanged {
                frame:   ctx.frame,
                weather: state.weather,
            },
        ];

        if state.weather.boosts_growth() {
            let boosted = state.grow_immature(ctx.config.rain_boost);
            events.push(GameEvent::RainBoost {
                frame:          ctx.frame,
                plants_boosted: boosted,
                amount:         ctx.config.rain_boost,
            });
        }

        Ok(events)
    }
}
