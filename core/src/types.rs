//! Shared primitive types used across the entire simulation.

/// One invocation of the tick pipeline. The shell runs one per rendered frame.
pub type Frame = u64;

/// In-game currency. Signed because plant cost has no floor.
pub type Money = i64;

/// Growth progress of a single plant, 0..=MAX_GROWTH.
pub type Growth = u32;

/// Wall-clock seconds since the Unix epoch.
pub type Timestamp = f64;

/// Identifier attached to every event log entry of one play session.
pub type SessionId = String;

/// A plant is harvestable once its growth reaches this value.
pub const MAX_GROWTH: Growth = 100;
