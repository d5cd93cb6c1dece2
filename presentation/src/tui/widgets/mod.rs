//! Render widgets: each takes a `&TuiState` and draws one region.

pub mod conversation;
pub mod header;
pub mod input;
pub mod load_panel;
pub mod status_bar;

pub use conversation::ConversationWidget;
pub use header::HeaderWidget;
pub use input::InputWidget;
pub use load_panel::LoadPanelWidget;
pub use status_bar::StatusBarWidget;
