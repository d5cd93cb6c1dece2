//! Inference provider adapters.
//!
//! A real deployment would wrap an on-device runtime SDK here; the crate
//! ships the scripted offline runtime so the binary runs and the session
//! controller can be exercised end-to-end without one.

mod scripted;

pub use scripted::ScriptedProvider;
