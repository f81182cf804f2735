//! Node shown in the detail side panel.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShownDetailState {
    pub node: Option<String>,
}

impl UiState for ShownDetailState {}

#[derive(Debug, Clone)]
pub enum ShownDetailIntent {
    Show(String),
    Hide,
}

impl Intent for ShownDetailIntent {}

pub struct ShownDetailReducer;

impl Reducer for ShownDetailReducer {
    const NAME: &'static str = "shown_detail";
    type State = ShownDetailState;
    type Intent = ShownDetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShownDetailIntent::Show(uuid) => ShownDetailState { node: Some(uuid) },
            ShownDetailIntent::Hide => ShownDetailState { node: None },
        }
    }
}
