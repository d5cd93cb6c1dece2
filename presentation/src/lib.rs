//! Presentation layer for localchat
//!
//! A ratatui terminal UI projecting the session controller's observable
//! state: a scrolling message list with live streaming text, an input box,
//! a load panel for download/initialization progress, and a status bar.
//! Pure projection plus command dispatch; business rules live in the
//! application layer.

pub mod cli;
pub mod tui;

pub use cli::Cli;
pub use tui::TuiApp;
