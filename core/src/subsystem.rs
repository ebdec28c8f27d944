//! Subsystem trait for the per-frame tick pipeline.
//!
//! RULE: Every stage of a frame implements SimSubsystem.
//! The engine calls update() on each registered subsystem
//! in registration order, once per frame.
//! Execution order is fixed and documented in engine.rs.

use crate::{
    config::GameConfig,
    error::SimResult,
    event::GameEvent,
    rng::RngBank,
    state::GameState,
    types::{Frame, Timestamp},
};

/// Everything a subsystem may read while updating one frame.
pub struct FrameContext<'a> {
    pub frame:  Frame,
    pub now:    Timestamp,
    pub config: &'a GameConfig,
}

/// The contract every tick stage must fulfill.
pub trait SimSubsystem: Send {
    /// Unique stable name for this subsystem.
    fn name(&self) -> &'static str;

    /// Called once per frame by the engine.
    ///
    /// - `ctx`:   frame number, clock reading, and config
    /// - `state`: the game state, already updated by earlier subsystems
    /// - `rng`:   the engine's RNG bank; draw only from your own slot
    ///
    /// Returns the events this stage produced.
    fn update(
        &mut self,
        ctx: &FrameContext<'_>,
        state: &mut GameState,
        rng: &mut RngBank,
    ) -> SimResult<Vec<GameEvent>>;
}
