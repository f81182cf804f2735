//! Frame counter driving edge and arrow redraws while rows move.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub frame: u64,
}

impl UiState for AnimationState {}

#[derive(Debug, Clone)]
pub enum AnimationIntent {
    Tick,
}

impl Intent for AnimationIntent {}

pub struct AnimationReducer;

impl Reducer for AnimationReducer {
    const NAME: &'static str = "animation_updater";
    type State = AnimationState;
    type Intent = AnimationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AnimationIntent::Tick => AnimationState {
                frame: state.frame.wrapping_add(1),
            },
        }
    }
}
