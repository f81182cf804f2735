//! Color palette supplied by the host.
//!
//! Colors are stored as the host passes them; deriving styles from them is
//! left to the renderer.

use std::collections::BTreeMap;

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorPaletteState {
    pub colors: BTreeMap<String, String>,
}

impl UiState for ColorPaletteState {}

impl ColorPaletteState {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for ColorPaletteState {
    fn from(colors: BTreeMap<String, String>) -> Self {
        Self { colors }
    }
}

#[derive(Debug, Clone)]
pub enum ColorPaletteIntent {
    /// Host pushed a new palette.
    Replace(BTreeMap<String, String>),
}

impl Intent for ColorPaletteIntent {}

pub struct ColorPaletteReducer;

impl Reducer for ColorPaletteReducer {
    const NAME: &'static str = "color_palette";
    type State = ColorPaletteState;
    type Intent = ColorPaletteIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ColorPaletteIntent::Replace(colors) => ColorPaletteState { colors },
        }
    }
}
