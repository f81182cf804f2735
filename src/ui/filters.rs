//! Signature filters restricting which symbols the graph shows.

use serde::{Deserialize, Serialize};

use crate::ui::mvi::{Intent, Reducer, UiState};

/// Predicate signature such as `edge/2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub args: usize,
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersState {
    pub active: Vec<Signature>,
}

impl UiState for FiltersState {}

#[derive(Debug, Clone)]
pub enum FiltersIntent {
    Add(Signature),
    Remove(Signature),
    Clear,
}

impl Intent for FiltersIntent {}

pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    const NAME: &'static str = "filters";
    type State = FiltersState;
    type Intent = FiltersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FiltersIntent::Add(signature) => {
                if !state.active.contains(&signature) {
                    state.active.push(signature);
                }
            }
            FiltersIntent::Remove(signature) => state.active.retain(|s| s != &signature),
            FiltersIntent::Clear => state.active.clear(),
        }
        state
    }
}
