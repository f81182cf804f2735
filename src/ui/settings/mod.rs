//! Settings store: the backend URL resolver every fetch depends on.
//!
//! This store has no dependencies and is mounted outermost so that every
//! other provider can read it during initialization.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::SettingsState;

use crate::ui::mvi::{Scope, ScopeError, StoreHandle};

/// Live settings store of the nearest settings provider.
pub fn use_settings(scope: &Scope) -> Result<StoreHandle<SettingsReducer>, ScopeError> {
    scope.use_store::<SettingsReducer>()
}
