use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Error,
    Warn,
}

/// One user-facing notification. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessagesState {
    /// Messages in dispatch order, which is also display order.
    pub active_messages: Vec<Message>,
}

impl UiState for MessagesState {}

impl MessagesState {
    pub fn len(&self) -> usize {
        self.active_messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_messages.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.active_messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
