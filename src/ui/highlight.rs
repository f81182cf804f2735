//! Highlighted node and highlighted symbol stores.

use serde::{Deserialize, Serialize};

use crate::ui::mvi::{Intent, Reducer, UiState};

/// Kind of graph element a user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Node,
    /// Clingraph rendering of a stable model.
    Box,
}

/// Reference to a rendered graph element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphElement {
    pub uuid: String,
    #[serde(default)]
    pub kind: ElementKind,
}

impl GraphElement {
    pub fn node(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            kind: ElementKind::Node,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedNodeState {
    pub node: Option<GraphElement>,
}

impl UiState for HighlightedNodeState {}

#[derive(Debug, Clone)]
pub enum HighlightedNodeIntent {
    Highlight(GraphElement),
    Clear,
}

impl Intent for HighlightedNodeIntent {}

pub struct HighlightedNodeReducer;

impl Reducer for HighlightedNodeReducer {
    const NAME: &'static str = "highlighted_node";
    type State = HighlightedNodeState;
    type Intent = HighlightedNodeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HighlightedNodeIntent::Highlight(element) => HighlightedNodeState {
                node: Some(element),
            },
            HighlightedNodeIntent::Clear => HighlightedNodeState { node: None },
        }
    }
}

/// Arrow drawn between a symbol and the symbol it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolArrow {
    pub src: String,
    pub tgt: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightedSymbolState {
    pub arrows: Vec<SymbolArrow>,
}

impl UiState for HighlightedSymbolState {}

#[derive(Debug, Clone)]
pub enum HighlightedSymbolIntent {
    /// Mark an arrow; an arrow with the same endpoints is not added twice.
    Add(SymbolArrow),
    Remove { src: String, tgt: String },
    /// "Clear marked symbols".
    Clear,
}

impl Intent for HighlightedSymbolIntent {}

pub struct HighlightedSymbolReducer;

impl Reducer for HighlightedSymbolReducer {
    const NAME: &'static str = "highlighted_symbol";
    type State = HighlightedSymbolState;
    type Intent = HighlightedSymbolIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HighlightedSymbolIntent::Add(arrow) => {
                let exists = state
                    .arrows
                    .iter()
                    .any(|a| a.src == arrow.src && a.tgt == arrow.tgt);
                if !exists {
                    state.arrows.push(arrow);
                }
            }
            HighlightedSymbolIntent::Remove { src, tgt } => {
                state.arrows.retain(|a| !(a.src == src && a.tgt == tgt));
            }
            HighlightedSymbolIntent::Clear => state.arrows.clear(),
        }
        state
    }
}
