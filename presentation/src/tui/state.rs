//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! Updated by the presenter (ChatEvent → state) and by key handling
//! (input editing, scrolling).

use localchat_domain::{ChatMessage, LoadPhase, Role};

/// Central TUI state: owned by the TuiApp select loop
pub struct TuiState {
    // -- Input --
    pub input: String,
    pub cursor_pos: usize,

    // -- Conversation --
    pub messages: Vec<DisplayMessage>,
    pub streaming_text: String,
    pub scroll_offset: usize,
    pub auto_scroll: bool,

    // -- Session --
    pub load_phase: LoadPhase,
    pub error: Option<String>,
    pub generating: bool,
    pub model_name: String,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            messages: Vec::new(),
            streaming_text: String::new(),
            scroll_offset: 0,
            auto_scroll: true,
            load_phase: LoadPhase::Idle,
            error: None,
            generating: false,
            model_name: String::new(),
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input.remove(self.cursor_pos - prev_char_len);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            let next_char_len = self.input[self.cursor_pos..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Take the current input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    // -- Messages --

    pub fn push_message(&mut self, msg: DisplayMessage) {
        self.messages.push(msg);
        if self.auto_scroll {
            self.scroll_offset = 0;
        }
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        } else {
            self.auto_scroll = true;
        }
    }
}

/// A single message in the conversation panel
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMessage {
    pub role: MessageRole,
    pub content: String,
}

impl DisplayMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Project a domain message for display, keeping only its text.
    pub fn from_chat(message: &ChatMessage) -> Self {
        let role = match message.role {
            Role::User => MessageRole::User,
            Role::Assistant => MessageRole::Assistant,
        };
        Self {
            role,
            content: message.text(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::User => Color::Cyan,
            Self::Assistant => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_delete_respect_utf8_boundaries() {
        let mut state = TuiState::new();
        state.insert_char('a');
        state.insert_char('é');
        state.insert_char('b');
        assert_eq!(state.input, "aéb");

        state.cursor_left();
        state.delete_char();
        assert_eq!(state.input, "ab");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn cursor_moves_by_whole_chars() {
        let mut state = TuiState::new();
        for c in "日本".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        assert_eq!(state.cursor_pos, "日".len());
        state.cursor_right();
        assert_eq!(state.cursor_pos, "日本".len());
    }

    #[test]
    fn take_input_clears_buffer_and_cursor() {
        let mut state = TuiState::new();
        for c in "hello".chars() {
            state.insert_char(c);
        }
        let taken = state.take_input();
        assert_eq!(taken, "hello");
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn push_message_resets_scroll_when_auto() {
        let mut state = TuiState::new();
        state.scroll_up();
        assert!(!state.auto_scroll);
        state.scroll_down();
        assert!(state.auto_scroll);

        state.scroll_up();
        state.push_message(DisplayMessage::user("hi"));
        // auto_scroll was off, so the offset is untouched
        assert_eq!(state.scroll_offset, 1);

        state.scroll_down();
        state.push_message(DisplayMessage::assistant("hello"));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn from_chat_keeps_only_text() {
        let msg = ChatMessage::assistant("fine, thanks");
        let display = DisplayMessage::from_chat(&msg);
        assert_eq!(display.role, MessageRole::Assistant);
        assert_eq!(display.content, "fine, thanks");
    }
}
