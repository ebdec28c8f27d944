//! Save-file persistence.
//!
//! RULE: Only store.rs touches the filesystem.
//! Loading never fails: a missing, unreadable, or corrupt file yields a
//! fresh game. Saving reports its errors to the caller.

use crate::{
    config::StartingEconomy,
    error::SimResult,
    snapshot,
    state::GameState,
    types::Timestamp,
};
use std::{io::ErrorKind, path::PathBuf};

pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// A store backed by the file at `path`. Nothing is read until load().
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Restore the saved game, or start a new one at `now`.
    pub fn load(&self, starting: &StartingEconomy, now: Timestamp) -> GameState {
        match std::fs::read_to_string(&self.path) {
            Ok(blob) => {
                let state = snapshot::load(&blob, starting, now);
                log::info!(
                    "Loaded {}: ${} and {} plants",
                    self.path.display(),
                    state.money,
                    state.plants().len()
                );
                state
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No save at {}, starting a new game", self.path.display());
                GameState::fresh(starting, now)
            }
            Err(e) => {
                log::warn!(
                    "Error reading save file {} ({e}). Starting a new game.",
                    self.path.display()
                );
                GameState::fresh(starting, now)
            }
        }
    }

    /// Write `state`, replacing any previous save.
    pub fn save(&self, state: &GameState) -> SimResult<()> {
        let blob = snapshot::save(state)?;
        std::fs::write(&self.path, blob)?;
        log::info!("Saved game to {}", self.path.display());
        Ok(())
    }
}
