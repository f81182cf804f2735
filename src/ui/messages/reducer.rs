use crate::ui::messages::intent::MessagesIntent;
use crate::ui::messages::state::{Message, MessageLevel, MessagesState};
use crate::ui::mvi::Reducer;

pub struct MessagesReducer;

impl Reducer for MessagesReducer {
    const NAME: &'static str = "user_messages";
    type State = MessagesState;
    type Intent = MessagesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessagesIntent::Error { text } => append(state, text, MessageLevel::Error),
            MessagesIntent::Warn { text } => append(state, text, MessageLevel::Warn),
            MessagesIntent::Unrecognized => state,
        }
    }
}

fn append(mut state: MessagesState, text: String, level: MessageLevel) -> MessagesState {
    state.active_messages.push(Message { text, level });
    state
}
