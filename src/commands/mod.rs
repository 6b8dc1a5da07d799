pub mod board;
pub mod config;
pub mod delete;
pub mod list;
pub mod new;

use anyhow::{Context, Result};
use eventboard_core::config::BoardConfig;
use eventboard_core::EventStore;

/// Open the configured store with its persisted list already loaded.
///
/// An unreadable blob is fatal here; the interactive board is the forgiving
/// surface.
pub fn open_loaded_store() -> Result<EventStore> {
    let config = BoardConfig::load().context("Could not load configuration")?;
    let mut store = config.open_store();
    store.load().context("Could not read stored events")?;
    Ok(store)
}
