use serde::{Deserialize, Serialize};

use crate::ui::mvi::Intent;

/// Action tag of an error message in the host's serialized form.
pub const ERROR_TAG: &str = "APP/MESSAGES/ERROR";
/// Action tag of a warning message in the host's serialized form.
pub const WARN_TAG: &str = "APP/MESSAGES/WARN";

/// Actions accepted by the messages store.
///
/// Actions coming from the host arrive as `{"type": ..., "text": ...}`;
/// any tag other than the two message tags decodes to `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessagesIntent {
    #[serde(rename = "APP/MESSAGES/ERROR")]
    Error { text: String },
    #[serde(rename = "APP/MESSAGES/WARN")]
    Warn { text: String },
    #[serde(other)]
    Unrecognized,
}

impl Intent for MessagesIntent {}

impl MessagesIntent {
    /// Decode an action dispatched by the host. Anything that is not a
    /// well-formed message action becomes `Unrecognized`.
    pub fn from_host(action: serde_json::Value) -> Self {
        serde_json::from_value(action).unwrap_or(MessagesIntent::Unrecognized)
    }
}

pub fn show_error(text: impl Into<String>) -> MessagesIntent {
    MessagesIntent::Error { text: text.into() }
}

pub fn show_warn(text: impl Into<String>) -> MessagesIntent {
    MessagesIntent::Warn { text: text.into() }
}
