//! State core of the viasp graph dashboard.
//!
//! Every slice of UI state lives in its own store built on the MVI
//! primitives in [`ui::mvi`]. Stores are mounted into a [`ui::mvi::Scope`]
//! chain by the [`dashboard::Dashboard`] composition root; descendants look
//! them up by ancestry. The user messages store additionally polls the
//! backend for transformation warnings, guarded by a [`mount::MountGuard`]
//! so completions arriving after teardown never reach the store.

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod mount;
pub mod ui;
