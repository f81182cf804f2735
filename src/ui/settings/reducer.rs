use crate::backend::BackendUrl;
use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    const NAME: &'static str = "settings";
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::SetBackendUrl(base) => {
                let mut next = state;
                next.backend_url = BackendUrl::new(base);
                next
            }
        }
    }
}
