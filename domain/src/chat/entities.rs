//! Chat domain entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One part of a message body.
///
/// Provider messages can carry non-text parts; only text parts are consumed
/// for history and display. Audio and function-call parts pass through
/// untouched so a message round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPart {
    Text(String),
    Audio { sample_rate: u32 },
    FunctionCall(FunctionCall),
}

/// A function invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: serde_json::Value,
}

/// A message in a conversation (Entity)
///
/// Immutable once appended to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    pub fn new(role: Role, content: Vec<ContentPart>) -> Self {
        Self { role, content }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::Text(text.into())],
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentPart::Text(text.into())],
        }
    }

    /// Concatenated text parts, skipping any non-text content.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text(value) => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_constructor_wraps_text_part() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text(), "hello");
    }

    #[test]
    fn text_joins_parts_and_skips_non_text() {
        let msg = ChatMessage::new(
            Role::Assistant,
            vec![
                ContentPart::Text("Hel".to_string()),
                ContentPart::Audio { sample_rate: 16_000 },
                ContentPart::Text("lo".to_string()),
            ],
        );
        assert_eq!(msg.text(), "Hello");
    }

    #[test]
    fn text_of_non_text_only_message_is_empty() {
        let msg = ChatMessage::new(
            Role::Assistant,
            vec![ContentPart::FunctionCall(FunctionCall {
                name: "lookup".to_string(),
                arguments: serde_json::json!({"query": "weather"}),
            })],
        );
        assert!(msg.text().is_empty());
    }
}
