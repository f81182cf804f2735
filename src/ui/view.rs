//! Main window state and its startup effects.
//!
//! On mount the main window asks the backend whether clingraph rendering is
//! in use and probes the transformations endpoint. Both run once against the
//! backend URL current at mount time.

use tokio::runtime::Handle;

use crate::backend::{BackendClient, BackendUrl};
use crate::mount::MountGuard;
use crate::ui::messages::{show_error, use_messages, MessagesReducer};
use crate::ui::mvi::{Intent, Reducer, Scope, ScopeError, StoreHandle, UiState};
use crate::ui::settings::use_settings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Whether the last graph row is rendered through clingraph.
    pub using_clingraph: bool,
}

impl UiState for ViewState {}

#[derive(Debug, Clone)]
pub enum ViewIntent {
    ClingraphDetected(bool),
}

impl Intent for ViewIntent {}

pub struct ViewReducer;

impl Reducer for ViewReducer {
    const NAME: &'static str = "main_window";
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::ClingraphDetected(using_clingraph) => ViewState { using_clingraph },
        }
    }
}

/// Mount the main window state below `scope`.
///
/// Requires settings and messages providers among the ancestors and a
/// running tokio runtime.
pub fn mount_main_window(
    scope: &Scope,
    client: &BackendClient,
    guard: &MountGuard,
) -> Result<Scope, ScopeError> {
    let backend_url = use_settings(scope)?.state().backend_url;
    let messages = use_messages(scope)?;
    let runtime = Handle::try_current().map_err(|_| ScopeError::NoRuntime {
        store: ViewReducer::NAME,
    })?;
    let view = StoreHandle::<ViewReducer>::new(ViewState::default());

    runtime.spawn(detect_clingraph(
        client.clone(),
        backend_url.clone(),
        view.clone(),
        guard.child(),
    ));
    runtime.spawn(probe_connection(
        client.clone(),
        backend_url,
        messages,
        guard.child(),
    ));

    Ok(scope.provide(view))
}

async fn detect_clingraph(
    client: BackendClient,
    backend_url: BackendUrl,
    view: StoreHandle<ViewReducer>,
    guard: MountGuard,
) {
    let result = client.fetch_clingraph_usage(&backend_url).await;
    if !guard.is_mounted() {
        return;
    }
    match result {
        Ok(using) => view.dispatch(ViewIntent::ClingraphDetected(using)),
        Err(err) => tracing::warn!(error = %err, "could not determine clingraph usage"),
    }
}

/// Surface an unreachable backend in the message queue.
async fn probe_connection(
    client: BackendClient,
    backend_url: BackendUrl,
    messages: StoreHandle<MessagesReducer>,
    guard: MountGuard,
) {
    let result = client.probe_transformations(&backend_url).await;
    if !guard.is_mounted() {
        return;
    }
    if let Err(err) = result {
        tracing::warn!(error = %err, "backend unreachable");
        messages.dispatch(show_error(format!(
            "Couldn't connect to server at {}",
            backend_url.resolve("")
        )));
    }
}
