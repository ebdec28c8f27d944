//! Weed Empire simulation core.
//!
//! Owns all economy and world state and exposes the operations a
//! presentation shell drives: plant, harvest, sell, upgrade, tick, and
//! save/load. Rendering, input, and audio live outside this crate.

pub mod achievement;
pub mod achievement_subsystem;
pub mod clock;
pub mod command;
pub mod config;
pub mod day_cycle;
pub mod economy;
pub mod engine;
pub mod error;
pub mod event;
pub mod growth_subsystem;
pub mod notification;
pub mod plant;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod subsystem;
pub mod types;
pub mod weather;
pub mod weather_subsystem;
