use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::backend::DEFAULT_BACKEND_URL;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashConfig {
    #[serde(default)]
    pub dash: DashSection,
    /// Named colors handed to the palette store.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// Identity and backend of the embedded dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashSection {
    /// Identifier the host uses for this component.
    #[serde(default = "default_id")]
    pub id: String,
    /// Base URL of the viasp backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

pub(crate) fn default_id() -> String {
    "viasp".to_string()
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for DashSection {
    fn default() -> Self {
        Self {
            id: default_id(),
            backend_url: default_backend_url(),
        }
    }
}
