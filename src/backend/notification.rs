//! Backend transformation notifications and their mapping to user messages.

use serde::{Deserialize, Serialize};

use crate::ui::messages::{show_error, show_warn, MessagesIntent};

/// Reason tag the backend uses for rules that break the analysis.
pub const FAILURE_REASON: &str = "FAILURE";

/// Reason attached to a notification, as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReason {
    pub value: String,
}

/// A rule the backend could not transform faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendNotification {
    pub reason: NotificationReason,
    /// Source text of the offending rule.
    pub ast: String,
}

impl BackendNotification {
    pub fn new(reason: impl Into<String>, ast: impl Into<String>) -> Self {
        Self {
            reason: NotificationReason {
                value: reason.into(),
            },
            ast: ast.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.reason.value == FAILURE_REASON
    }
}

/// Map a backend notification to the message intent shown to the user.
///
/// Failures become errors; every other reason tag, known or not, becomes a
/// warning. New backend tags that need their own treatment go here.
pub fn normalize(notification: &BackendNotification) -> MessagesIntent {
    if notification.is_failure() {
        return show_error(format!(
            "The program contains a rule that will cause false behaviour! Remove/Rephrase the following rule: {}",
            notification.ast
        ));
    }
    show_warn(format!(
        "The program contains a rule that is not supported! The graph shown might be faulty! {}",
        notification.ast
    ))
}
