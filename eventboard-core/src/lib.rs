//! Core types for the eventboard ecosystem.
//!
//! This crate provides everything the CLI screens sit on top of:
//! - `Event` and `EventDraft` for the records themselves
//! - `EventStore` for the canonical list, mirrored to a blob store
//! - `EventListController` for main-screen intent handling
//! - `blob` for the key-value persistence boundary

pub mod blob;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod store;

// Re-export the common types at crate root for convenience
pub use controller::{EventListController, EventListView, NoopRegister, OnRegister};
pub use error::{EventBoardError, EventBoardResult};
pub use event::{Event, EventDraft};
pub use store::{EventStore, EVENTS_KEY};
