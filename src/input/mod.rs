//! Adapters that turn outside input into renderer events.

#[cfg(feature = "gui")]
pub mod gui;
