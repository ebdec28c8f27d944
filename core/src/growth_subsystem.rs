use crate::{
    error::SimResult,
    event::GameEvent,
    rng::RngBank,
    state::GameState,
    subsystem::{FrameContext, SimSubsystem},
};

/// Grows every immature plant by a fixed amount each frame.
/// Emits no events; growth is visible through the state.
#[derive(Debug, Default)]
pub struct GrowthSubsystem;

impl GrowthSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl SimSubsystem for GrowthSubsystem {
    fn name(&self) -> &'static str { "growth" }

    fn update(
        &mut self,
        ctx: &FrameContext<'_>,
        state: &mut GameState,
        _rng: &mut RngBank,
    ) -> SimResult<Vec<GameEvent>> {
        let grown = state.grow_immature(ctx.config.growth_per_tick);
        if grown > 0 {
            log::trace!("frame={} growth: {grown} plants grew", ctx.frame);
        }
        Ok(vec![])
    }
}
