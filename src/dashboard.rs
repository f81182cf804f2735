//! Composition root of the dashboard state.
//!
//! [`Dashboard::mount`] builds the provider chain in dependency order:
//!
//! ```text
//! settings
//! └─ color_palette
//!    └─ highlighted_node
//!       └─ highlighted_symbol
//!          └─ shown_recursion
//!             └─ shown_detail
//!                └─ filters
//!                   └─ animation_updater
//!                      └─ user_messages      (reads settings)
//!                         └─ main_window     (reads settings, user_messages)
//! ```
//!
//! Settings is outermost because its backend URL is the one value every
//! other provider may need while initializing.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, BackendUrl, DEFAULT_BACKEND_URL};
use crate::config::{default_id, DashConfig};
use crate::mount::MountGuard;
use crate::ui::animation::{AnimationReducer, AnimationState};
use crate::ui::detail::{ShownDetailReducer, ShownDetailState};
use crate::ui::filters::{FiltersReducer, FiltersState};
use crate::ui::highlight::{
    GraphElement, HighlightedNodeIntent, HighlightedNodeReducer, HighlightedNodeState,
    HighlightedSymbolReducer, HighlightedSymbolState,
};
use crate::ui::messages::{mount_user_messages, use_messages, MessagesReducer};
use crate::ui::mvi::{Scope, ScopeError, StoreHandle};
use crate::ui::palette::{ColorPaletteReducer, ColorPaletteState};
use crate::ui::recursion::{ShownRecursionReducer, ShownRecursionState};
use crate::ui::settings::{SettingsReducer, SettingsState};
use crate::ui::view::mount_main_window;

/// Properties the host passes when embedding the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashProps {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for DashProps {
    fn default() -> Self {
        Self {
            id: default_id(),
            colors: BTreeMap::new(),
            backend_url: default_backend_url(),
        }
    }
}

impl From<DashConfig> for DashProps {
    fn from(config: DashConfig) -> Self {
        Self {
            id: config.dash.id,
            colors: config.colors,
            backend_url: config.dash.backend_url,
        }
    }
}

/// The only data reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNotification {
    pub clicked_on: GraphElement,
}

/// Receiver of outbound notifications, implemented by the host.
pub trait HostNotifier: Send + Sync {
    fn notify(&self, notification: HostNotification);
}

impl<F> HostNotifier for F
where
    F: Fn(HostNotification) + Send + Sync,
{
    fn notify(&self, notification: HostNotification) {
        (self)(notification)
    }
}

/// Mounted dashboard state tree.
///
/// Dropping the dashboard unmounts it: every pending backend completion is
/// discarded from then on.
pub struct Dashboard {
    id: String,
    scope: Scope,
    guard: MountGuard,
    notifier: Arc<dyn HostNotifier>,
}

impl Dashboard {
    /// Mount all providers.
    ///
    /// Fails with [`ScopeError::NoRuntime`] when called outside a tokio runtime.
    pub fn mount(
        props: DashProps,
        client: BackendClient,
        notifier: impl HostNotifier + 'static,
    ) -> Result<Self, ScopeError> {
        let guard = MountGuard::new();
        tracing::info!(id = %props.id, backend = %props.backend_url, "mounting dashboard");

        let scope = Scope::root()
            .provide(StoreHandle::<SettingsReducer>::new(SettingsState::new(
                BackendUrl::new(props.backend_url),
            )))
            .provide(StoreHandle::<ColorPaletteReducer>::new(ColorPaletteState::from(
                props.colors,
            )))
            .provide(StoreHandle::<HighlightedNodeReducer>::new(
                HighlightedNodeState::default(),
            ))
            .provide(StoreHandle::<HighlightedSymbolReducer>::new(
                HighlightedSymbolState::default(),
            ))
            .provide(StoreHandle::<ShownRecursionReducer>::new(
                ShownRecursionState::default(),
            ))
            .provide(StoreHandle::<ShownDetailReducer>::new(ShownDetailState::default()))
            .provide(StoreHandle::<FiltersReducer>::new(FiltersState::default()))
            .provide(StoreHandle::<AnimationReducer>::new(AnimationState::default()));

        let scope = mount_user_messages(&scope, &client, &guard)?;
        let scope = mount_main_window(&scope, &client, &guard)?;

        Ok(Self {
            id: props.id,
            scope,
            guard,
            notifier: Arc::new(notifier),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Innermost scope; every store is reachable from here.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn messages(&self) -> Result<StoreHandle<MessagesReducer>, ScopeError> {
        use_messages(&self.scope)
    }

    /// User clicked a graph element: highlight it and tell the host.
    pub fn select(&self, element: GraphElement) -> Result<(), ScopeError> {
        self.scope
            .use_store::<HighlightedNodeReducer>()?
            .dispatch(HighlightedNodeIntent::Highlight(element.clone()));
        self.notifier.notify(HostNotification {
            clicked_on: element,
        });
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    pub fn unmount(&self) {
        if self.guard.is_mounted() {
            tracing::info!(id = %self.id, "unmounting dashboard");
        }
        self.guard.unmount();
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.unmount();
    }
}
