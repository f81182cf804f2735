//! Nodes whose recursive sub-graph is expanded.

use std::collections::BTreeSet;

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShownRecursionState {
    pub expanded: BTreeSet<String>,
}

impl UiState for ShownRecursionState {}

impl ShownRecursionState {
    pub fn is_expanded(&self, uuid: &str) -> bool {
        self.expanded.contains(uuid)
    }
}

#[derive(Debug, Clone)]
pub enum ShownRecursionIntent {
    Toggle(String),
    CollapseAll,
}

impl Intent for ShownRecursionIntent {}

pub struct ShownRecursionReducer;

impl Reducer for ShownRecursionReducer {
    const NAME: &'static str = "shown_recursion";
    type State = ShownRecursionState;
    type Intent = ShownRecursionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShownRecursionIntent::Toggle(uuid) => {
                if !state.expanded.remove(&uuid) {
                    state.expanded.insert(uuid);
                }
            }
            ShownRecursionIntent::CollapseAll => state.expanded.clear(),
        }
        state
    }
}
