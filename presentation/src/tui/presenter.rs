//! Presenter: folds controller events into TUI state.
//!
//! The translation layer between the application's observable events and
//! view state. No business rules: every arm is a direct projection.

use super::state::{DisplayMessage, TuiState};
use localchat_application::ChatEvent;

pub struct Presenter;

impl Presenter {
    /// Apply one [`ChatEvent`] to the state.
    pub fn apply(state: &mut TuiState, event: ChatEvent) {
        match event {
            ChatEvent::LoadPhaseChanged(phase) => state.load_phase = phase,
            ChatEvent::HistoryReplaced(messages) => {
                state.messages = messages.iter().map(DisplayMessage::from_chat).collect();
                if state.auto_scroll {
                    state.scroll_offset = 0;
                }
            }
            ChatEvent::MessageAppended(message) => {
                state.push_message(DisplayMessage::from_chat(&message));
            }
            ChatEvent::StreamDelta(chunk) => {
                state.streaming_text.push_str(&chunk);
                if state.auto_scroll {
                    state.scroll_offset = 0;
                }
            }
            ChatEvent::StreamCleared => state.streaming_text.clear(),
            ChatEvent::GenerationStarted => state.generating = true,
            ChatEvent::GenerationEnded => state.generating = false,
            ChatEvent::ErrorReported(error) => state.error = Some(error),
            ChatEvent::ErrorCleared => state.error = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localchat_domain::{ChatMessage, LoadPhase};

    #[test]
    fn load_phase_is_mirrored() {
        let mut state = TuiState::new();
        Presenter::apply(&mut state, ChatEvent::LoadPhaseChanged(LoadPhase::Ready));
        assert!(state.load_phase.is_ready());
    }

    #[test]
    fn stream_deltas_accumulate_and_clear() {
        let mut state = TuiState::new();
        Presenter::apply(&mut state, ChatEvent::StreamDelta("Hel".to_string()));
        Presenter::apply(&mut state, ChatEvent::StreamDelta("lo".to_string()));
        assert_eq!(state.streaming_text, "Hello");

        Presenter::apply(&mut state, ChatEvent::StreamCleared);
        assert!(state.streaming_text.is_empty());
    }

    #[test]
    fn history_replacement_projects_text() {
        let mut state = TuiState::new();
        Presenter::apply(
            &mut state,
            ChatEvent::HistoryReplaced(vec![
                ChatMessage::user("hi"),
                ChatMessage::assistant("hello"),
            ]),
        );
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].content, "hello");
    }

    #[test]
    fn generation_flag_follows_lifecycle_events() {
        let mut state = TuiState::new();
        Presenter::apply(&mut state, ChatEvent::GenerationStarted);
        assert!(state.generating);
        Presenter::apply(&mut state, ChatEvent::GenerationEnded);
        assert!(!state.generating);
    }

    #[test]
    fn errors_are_reported_and_cleared() {
        let mut state = TuiState::new();
        Presenter::apply(
            &mut state,
            ChatEvent::ErrorReported("Generation failed: boom".to_string()),
        );
        assert!(state.error.as_deref().unwrap().contains("boom"));
        Presenter::apply(&mut state, ChatEvent::ErrorCleared);
        assert!(state.error.is_none());
    }
}
