use crate::{
    achievement::ACHIEVEMENTS,
    error::SimResult,
    event::GameEvent,
    rng::RngBank,
    state::GameState,
    subsystem::{FrameContext, SimSubsystem},
};

/// Awards achievements whose condition holds at the end of a frame.
/// Runs last so conditions see this frame's growth.
#[derive(Debug, Default)]
pub struct AchievementSubsystem;

impl AchievementSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl SimSubsystem for AchievementSubsystem {
    fn name(&self) -> &'static str { "achievement" }

    fn update(
        &mut self,
        ctx: &FrameContext<'_>,
        state: &mut GameState,
        _rng: &mut RngBank,
    ) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        for def in ACHIEVEMENTS {
            if state.achievements.contains(def.id) || !(def.condition)(state) {
                continue;
            }
            state.achievements.award(def.id);
            log::info!("frame={} achievement unlocked: {}", ctx.frame, def.id);
            events.push(GameEvent::AchievementUnlocked {
                frame: ctx.frame,
                id:    def.id.to_string(),
            });
        }
        Ok(events)
    }
}
