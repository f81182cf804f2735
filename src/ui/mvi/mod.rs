//! Model-View-Intent (MVI) primitives shared by every dashboard store.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one slice of UI state
//! - **Intent**: User actions or backend events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **StoreHandle**: Shared `(state, dispatch)` pair for a mounted store
//! - **Scope**: Ancestry chain through which descendants find their stores

mod intent;
mod reducer;
mod scope;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use scope::{Scope, ScopeError};
pub use state::UiState;
pub use store::StoreHandle;
