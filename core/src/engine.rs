//! The simulation engine: owns the game state and drives it.
//!
//! EXECUTION ORDER within one frame (fixed, never reordered):
//!   1. Weather subsystem      (day/night flip, weather resample, rain boost)
//!   2. Growth subsystem       (+growth_per_tick to immature plants)
//!   3. Achievement subsystem  (milestones checked against the grown state)
//!
//! RULES:
//!   - Player commands apply immediately, between frames.
//!   - All randomness flows through the RngBank.
//!   - Every event, from subsystems and commands alike, lands in the event log.

use crate::{
    achievement_subsystem::AchievementSubsystem,
    clock::{Clock, ManualClock},
    command::PlayerCommand,
    config::GameConfig,
    error::{SimError, SimResult},
    event::{EventLogEntry, GameEvent},
    growth_subsystem::GrowthSubsystem,
    rng::{RngBank, RngSlot},
    snapshot::SaveFile,
    state::GameState,
    store::SaveStore,
    subsystem::{FrameContext, SimSubsystem},
    types::{Frame, Money, SessionId, Timestamp},
    weather_subsystem::WeatherSubsystem,
};

/// Clock reading test engines start at (2024-01-01T00:00:00Z).
pub const TEST_EPOCH: Timestamp = 1_704_067_200.0;

const PLAYER_SOURCE: &str = "player";

pub struct GameEngine {
    pub session_id: SessionId,
    pub config:     GameConfig,
    state:          GameState,
    clock:          Box<dyn Clock>,
    rng_bank:       RngBank,
    subsystems:     Vec<Box<dyn SimSubsystem>>,
    frame:          Frame,
    /// Real seconds not yet consumed by a whole tick.
    accumulator:    f64,
    event_log:      Vec<EventLogEntry>,
}

impl GameEngine {
    fn new(
        session_id: SessionId,
        config: GameConfig,
        state: GameState,
        clock: Box<dyn Clock>,
        seed: u64,
    ) -> Self {
        Self {
            session_id,
            config,
            state,
            clock,
            rng_bank: RngBank::new(seed),
            subsystems: Vec::new(),
            frame: 0,
            accumulator: 0.0,
            event_log: Vec::new(),
        }
    }

    /// Build a fully wired engine around the game saved in `store`
    /// (or a new game if there is none).
    pub fn build(
        session_id: SessionId,
        config: GameConfig,
        clock: Box<dyn Clock>,
        seed: u64,
        store: &SaveStore,
    ) -> SimResult<Self> {
        config.validate()?;
        let state = store.load(&config.starting, clock.now());
        Ok(Self::wired(session_id, config, state, clock, seed))
    }

    /// Build a fully wired engine around an existing state.
    /// Fails if `config` would break the simulation (empty planting region,
    /// zero tick rate).
    pub fn with_state(
        session_id: SessionId,
        config: GameConfig,
        state: GameState,
        clock: Box<dyn Clock>,
        seed: u64,
    ) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::wired(session_id, config, state, clock, seed))
    }

    /// A fresh game on a manual clock at TEST_EPOCH, developer commands on.
    pub fn build_test(session_id: SessionId, seed: u64) -> Self {
        let config = GameConfig::default_test();
        let state = GameState::new_game(&config, TEST_EPOCH);
        let clock = Box::new(ManualClock::starting_at(TEST_EPOCH));
        Self::wired(session_id, config, state, clock, seed)
    }

    fn wired(
        session_id: SessionId,
        config: GameConfig,
        state: GameState,
        clock: Box<dyn Clock>,
        seed: u64,
    ) -> Self {
        let mut engine = GameEngine::new(session_id, config, state, clock, seed);
        // EXECUTION ORDER: fixed, documented, never reordered.
        engine.register(Box::new(WeatherSubsystem::new()));
        engine.register(Box::new(GrowthSubsystem::new()));
        engine.register(Box::new(AchievementSubsystem::new()));
        engine
    }

    /// Register a subsystem. Call in the documented execution order.
    pub fn register(&mut self, subsystem: Box<dyn SimSubsystem>) {
        self.subsystems.push(subsystem);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn clock_mut(&mut self) -> &mut dyn Clock {
        self.clock.as_mut()
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    // ── Frames ─────────────────────────────────────────────────

    /// Advance one frame. This is the core simulation step.
    pub fn tick(&mut self) -> SimResult<Vec<GameEvent>> {
        self.frame += 1;
        self.clock.advance(self.config.frame_duration());

        let ctx = FrameContext {
            frame:  self.frame,
            now:    self.clock.now(),
            config: &self.config,
        };

        let mut frame_events = Vec::new();
        for subsystem in &mut self.subsystems {
            let new_events = subsystem.update(&ctx, &mut self.state, &mut self.rng_bank)?;
            append_to_log(
                &mut self.event_log,
                &self.session_id,
                ctx.frame,
                subsystem.name(),
                &new_events,
            )?;
            frame_events.extend(new_events);
        }
        Ok(frame_events)
    }

    /// Run n frames in a loop. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(self.tick()?);
        }
        Ok(events)
    }

    /// Feed real elapsed time and run every whole tick it covers.
    /// Growth speed then depends on time, not on how often this is called.
    pub fn advance(&mut self, elapsed_secs: f64) -> SimResult<Vec<GameEvent>> {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.accumulator += elapsed_secs;
        }
        let rate = f64::from(self.config.ticks_per_second);
        // Epsilon keeps 1.0s at 30 tps from rounding down to 29 ticks.
        let ticks = (self.accumulator * rate + 1e-9).floor();
        self.accumulator = (self.accumulator - ticks / rate).max(0.0);
        self.run_ticks(ticks as u64)
    }

    // ── Commands ───────────────────────────────────────────────

    /// Apply a player command immediately.
    /// Gameplay commands never fail; privileged ones fail without dev_mode.
    pub fn apply(&mut self, command: PlayerCommand) -> SimResult<Vec<GameEvent>> {
        if command.is_privileged() && !self.config.dev_mode {
            log::warn!("frame={} rejected {}: developer mode is off", self.frame, command.name());
            return Err(SimError::DevModeDisabled {
                command: command.name().to_string(),
            });
        }
        let events = self.execute(&command);
        append_to_log(&mut self.event_log, &self.session_id, self.frame, PLAYER_SOURCE, &events)?;
        Ok(events)
    }

    pub fn plant(&mut self) -> SimResult<Vec<GameEvent>> {
        self.apply(PlayerCommand::Plant)
    }

    /// Collect ready plants. Returns the harvested amount.
    pub fn harvest(&mut self) -> SimResult<Money> {
        let events = self.apply(PlayerCommand::Harvest)?;
        Ok(events
            .iter()
            .map(|e| match e {
                GameEvent::Harvested { amount, .. } => *amount,
                _ => 0,
            })
            .sum())
    }

    pub fn sell(&mut self) -> SimResult<Vec<GameEvent>> {
        self.apply(PlayerCommand::Sell)
    }

    pub fn upgrade(&mut self) -> SimResult<Vec<GameEvent>> {
        self.apply(PlayerCommand::Upgrade)
    }

    fn execute(&mut self, command: &PlayerCommand) -> Vec<GameEvent> {
        let frame = self.frame;
        let region = self.config.planting_region;
        let state = &mut self.state;

        match command {
            PlayerCommand::Plant => state
                .plant(&region, self.rng_bank.slot(RngSlot::Planting))
                .map(|outcome| GameEvent::Planted {
                    frame,
                    x:           outcome.position.x,
                    y:           outcome.position.y,
                    cost:        outcome.cost,
                    money_after: state.money,
                })
                .into_iter()
                .collect(),

            PlayerCommand::Harvest => {
                let outcome = state.harvest();
                if outcome.amount > 0 {
                    vec![GameEvent::Harvested {
                        frame,
                        plants: outcome.plants,
                        amount: outcome.amount,
                    }]
                } else {
                    vec![]
                }
            }

            PlayerCommand::Sell => match state.sell() {
                Some(sale) => {
                    log::debug!(
                        "frame={frame} sold {} units for ${}",
                        sale.harvest.amount,
                        sale.earnings
                    );
                    vec![
                        GameEvent::Harvested {
                            frame,
                            plants: sale.harvest.plants,
                            amount: sale.harvest.amount,
                        },
                        GameEvent::Sold {
                            frame,
                            amount:      sale.harvest.amount,
                            earnings:    sale.earnings,
                            money_after: state.money,
                        },
                    ]
                }
                None => vec![],
            },

            PlayerCommand::Upgrade => state
                .upgrade(&self.config.upgrade)
                .map(|outcome| {
                    log::info!("frame={frame} farm upgraded to level {}", outcome.new_level);
                    GameEvent::Upgraded {
                        frame,
                        level:     outcome.new_level,
                        cost_paid: outcome.cost_paid,
                        next_cost: state.economy.upgrade_cost,
                    }
                })
                .into_iter()
                .collect(),

            PlayerCommand::AddPlants { count, growth } => {
                let added = state.add_plants(
                    *count,
                    *growth,
                    &region,
                    self.rng_bank.slot(RngSlot::DevPlanting),
                );
                vec![GameEvent::DevPlantsAdded { frame, count: added, growth: *growth }]
            }

            PlayerCommand::AddMoney { amount } => {
                if *amount < 0 {
                    log::warn!("frame={frame} ignored negative money grant {amount}");
                }
                let credited = state.add_money(*amount);
                vec![GameEvent::DevMoneyAdded { frame, amount: credited }]
            }
        }
    }

    // ── Event log & persistence ────────────────────────────────

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// Log entries recorded during `frame`, in emission order.
    pub fn events_for_frame(&self, frame: Frame) -> Vec<&EventLogEntry> {
        self.event_log.iter().filter(|e| e.frame == frame).collect()
    }

    /// The save-file view of the current state.
    pub fn snapshot(&self) -> SaveFile {
        SaveFile::capture(&self.state)
    }

    pub fn save(&self, store: &SaveStore) -> SimResult<()> {
        store.save(&self.state)
    }
}

fn append_to_log(
    log: &mut Vec<EventLogEntry>,
    session_id: &SessionId,
    frame: Frame,
    source: &str,
    events: &[GameEvent],
) -> SimResult<()> {
    for event in events {
        log.push(EventLogEntry {
            session_id: session_id.clone(),
            frame,
            source:     source.to_string(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        });
    }
    Ok(())
}
