//! Ports: interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure layer; the
//! presentation layer consumes the event surface defined in
//! [`ui_event`].

pub mod inference;
pub mod transcript_logger;
pub mod ui_event;
