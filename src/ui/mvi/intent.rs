//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (selecting a node, toggling a filter)
/// - Backend events (warnings, connectivity failures)
///
/// Intents are processed by reducers to produce new states. `Debug` is
/// required so every dispatch can be traced.
pub trait Intent: Debug + Send + 'static {}
