//! Dashboard configuration.
//!
//! Hosts normally pass [`DashProps`](crate::dashboard::DashProps) directly;
//! this module lets them read the same values from a TOML file instead.

mod loader;
mod types;

pub use loader::ConfigError;
pub(crate) use types::default_id;
pub use types::{DashConfig, DashSection};
