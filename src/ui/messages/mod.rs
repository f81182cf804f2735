//! User messages store: the queue of errors and warnings shown to the user.
//!
//! The queue is fed from two directions. Any component below the provider
//! may dispatch [`show_error`] / [`show_warn`] directly, and the provider
//! itself polls the backend for transformation warnings when it mounts.
//! Messages are only ever appended; the queue lives as long as the provider.

mod intent;
mod provider;
mod reducer;
mod state;

pub use intent::{show_error, show_warn, MessagesIntent, ERROR_TAG, WARN_TAG};
pub use provider::{mount_user_messages, populate_messages};
pub use reducer::MessagesReducer;
pub use state::{Message, MessageLevel, MessagesState};

use crate::ui::mvi::{Scope, ScopeError, StoreHandle};

/// Live `(state, dispatch)` pair of the nearest messages provider.
pub fn use_messages(scope: &Scope) -> Result<StoreHandle<MessagesReducer>, ScopeError> {
    scope.use_store::<MessagesReducer>()
}
