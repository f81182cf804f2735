//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer: 'static {
    /// Store name used in logs and lookup errors.
    const NAME: &'static str;

    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects. Intents the
    /// reducer does not act on must return the state unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
