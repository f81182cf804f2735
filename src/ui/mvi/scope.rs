//! Lookup of mounted stores by ancestry.
//!
//! A [`Scope`] is an immutable chain of provided stores. Mounting a provider
//! produces a child scope that is handed to its descendants; a descendant
//! finds a store by walking from its own scope towards the root. The nearest
//! provider of a store type wins, and two scope chains built independently
//! never see each other's stores.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::reducer::Reducer;
use super::store::StoreHandle;

/// Errors raised when resolving a store from a scope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Store '{store}' is not provided by any ancestor")]
    MissingStore { store: &'static str },
    #[error("Store '{store}' needs a tokio runtime to start its effects")]
    NoRuntime { store: &'static str },
}

struct ScopeNode {
    key: TypeId,
    name: &'static str,
    handle: Box<dyn Any + Send + Sync>,
    parent: Option<Arc<ScopeNode>>,
}

/// Position in the provider tree.
#[derive(Clone, Default)]
pub struct Scope {
    node: Option<Arc<ScopeNode>>,
}

impl Scope {
    /// Empty scope with no providers.
    pub fn root() -> Self {
        Self::default()
    }

    /// Child scope in which `handle` is visible to all descendants.
    pub fn provide<R: Reducer>(&self, handle: StoreHandle<R>) -> Self {
        tracing::info!(store = R::NAME, depth = self.depth() + 1, "provider mounted");
        Self {
            node: Some(Arc::new(ScopeNode {
                key: TypeId::of::<R>(),
                name: R::NAME,
                handle: Box::new(handle),
                parent: self.node.clone(),
            })),
        }
    }

    /// Nearest provided store of type `R`, if any.
    pub fn try_use<R: Reducer>(&self) -> Option<StoreHandle<R>> {
        let key = TypeId::of::<R>();
        let mut cursor = self.node.as_deref();
        while let Some(node) = cursor {
            if node.key == key {
                return node.handle.downcast_ref::<StoreHandle<R>>().cloned();
            }
            cursor = node.parent.as_deref();
        }
        None
    }

    /// Nearest provided store of type `R`.
    pub fn use_store<R: Reducer>(&self) -> Result<StoreHandle<R>, ScopeError> {
        self.try_use::<R>()
            .ok_or(ScopeError::MissingStore { store: R::NAME })
    }

    /// Number of providers between this scope and the root.
    pub fn depth(&self) -> usize {
        self.providers().len()
    }

    /// Store names from the outermost provider to the innermost.
    pub fn providers(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut cursor = self.node.as_deref();
        while let Some(node) = cursor {
            names.push(node.name);
            cursor = node.parent.as_deref();
        }
        names.reverse();
        names
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("providers", &self.providers())
            .finish()
    }
}
