//! Messages provider and its backend population effect.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::backend::{normalize, BackendClient, BackendError, BackendNotification, BackendUrl};
use crate::mount::MountGuard;
use crate::ui::messages::intent::show_error;
use crate::ui::messages::reducer::MessagesReducer;
use crate::ui::messages::state::MessagesState;
use crate::ui::mvi::{Reducer, Scope, ScopeError, StoreHandle};
use crate::ui::settings::{use_settings, SettingsState};

/// Mount the messages store below `scope`.
///
/// Requires a settings provider among the ancestors. Starts the warnings
/// poll immediately and again every time the backend URL changes; all of
/// it stops once `guard` is unmounted. Fails with
/// [`ScopeError::NoRuntime`] outside a tokio runtime.
pub fn mount_user_messages(
    scope: &Scope,
    client: &BackendClient,
    guard: &MountGuard,
) -> Result<Scope, ScopeError> {
    let settings = use_settings(scope)?;
    let runtime = Handle::try_current().map_err(|_| ScopeError::NoRuntime {
        store: MessagesReducer::NAME,
    })?;
    let messages = StoreHandle::<MessagesReducer>::new(MessagesState::default());

    runtime.spawn(follow_backend_url(
        settings.subscribe(),
        messages.clone(),
        client.clone(),
        guard.child(),
    ));

    Ok(scope.provide(messages))
}

/// Run one population per backend URL until the provider unmounts.
async fn follow_backend_url(
    mut settings: watch::Receiver<SettingsState>,
    messages: StoreHandle<MessagesReducer>,
    client: BackendClient,
    guard: MountGuard,
) {
    let mut backend_url = settings.borrow_and_update().backend_url.clone();
    loop {
        let run = guard.child();
        tracing::info!(backend = backend_url.base(), "polling backend warnings");
        tokio::spawn(populate_messages(
            fetch_warnings(client.clone(), backend_url.clone()),
            messages.clone(),
            run.clone(),
        ));

        loop {
            tokio::select! {
                _ = guard.unmounted() => {
                    tracing::info!("user messages provider unmounted");
                    return;
                }
                changed = settings.changed() => {
                    if changed.is_err() {
                        guard.unmount();
                        return;
                    }
                    let next = settings.borrow_and_update().backend_url.clone();
                    if !next.same_as(&backend_url) {
                        run.unmount();
                        backend_url = next;
                        break;
                    }
                }
            }
        }
    }
}

async fn fetch_warnings(
    client: BackendClient,
    backend_url: BackendUrl,
) -> Result<Vec<BackendNotification>, BackendError> {
    client.fetch_warnings(&backend_url).await
}

/// Apply the outcome of one warnings poll to the messages store.
///
/// Waits for `fetch`, then, if `guard` is still mounted, dispatches one
/// message per notification in backend order, or a single error message
/// when the poll failed. If the guard was unmounted in the meantime the
/// result is dropped without touching the store.
pub async fn populate_messages<F>(fetch: F, messages: StoreHandle<MessagesReducer>, guard: MountGuard)
where
    F: Future<Output = Result<Vec<BackendNotification>, BackendError>>,
{
    let result = fetch.await;

    if !guard.is_mounted() {
        tracing::trace!("warnings poll resolved after unmount; discarded");
        return;
    }

    match result {
        Ok(notifications) => {
            tracing::debug!(count = notifications.len(), "backend warnings received");
            for notification in &notifications {
                messages.dispatch(normalize(notification));
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to poll backend warnings");
            messages.dispatch(show_error(format!("Failed to get warnings: {}", err)));
        }
    }
}
