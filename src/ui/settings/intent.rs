use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIntent {
    /// Point the dashboard at another backend. Effects that depend on the
    /// resolver re-run when the base actually changes.
    SetBackendUrl(String),
}

impl Intent for SettingsIntent {}
