use crate::backend::BackendUrl;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub backend_url: BackendUrl,
}

impl UiState for SettingsState {}

impl SettingsState {
    pub fn new(backend_url: BackendUrl) -> Self {
        Self { backend_url }
    }
}
