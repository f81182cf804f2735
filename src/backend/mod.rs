//! Access to the viasp analysis backend.
//!
//! The backend is an external HTTP service returning JSON. This module owns
//! its vocabulary: the endpoint paths, the shape of its notifications and the
//! mapping from those notifications to user messages.

mod client;
mod error;
mod notification;
mod url;

pub use client::{BackendClient, CLINGRAPH_PATH, TRANSFORMATIONS_PATH, WARNINGS_PATH};
pub use error::BackendError;
pub use notification::{normalize, BackendNotification, NotificationReason, FAILURE_REASON};
pub use url::{BackendUrl, DEFAULT_BACKEND_URL};
