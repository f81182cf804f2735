//! Mount lifecycle flags for providers and their asynchronous effects.
//!
//! A provider owns a [`MountGuard`] for as long as it is mounted. Every
//! asynchronous effect it starts receives a child guard and must check
//! [`MountGuard::is_mounted`] before touching state. Unmounting a guard
//! unmounts all of its children, so tearing down the composition root
//! silences every pending completion below it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::Notify;

struct GuardInner {
    mounted: AtomicBool,
    notify: Notify,
    children: Mutex<Vec<Weak<GuardInner>>>,
}

/// Cooperative cancellation flag tied to one mount.
#[derive(Clone)]
pub struct MountGuard {
    inner: Arc<GuardInner>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GuardInner {
                mounted: AtomicBool::new(true),
                notify: Notify::new(),
                children: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Guard that is unmounted together with `self`.
    ///
    /// A child created after `self` was unmounted starts unmounted.
    pub fn child(&self) -> Self {
        let child = Self::new();
        // The flag is read under the children lock; unmount() clears the
        // flag before taking that lock, so no child can be missed.
        let mut children = self.inner.children.lock();
        if self.is_mounted() {
            children.retain(|c| c.strong_count() > 0);
            children.push(Arc::downgrade(&child.inner));
        } else {
            child.inner.mounted.store(false, Ordering::SeqCst);
        }
        child
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    /// Clear the flag on this guard and all of its descendants.
    pub fn unmount(&self) {
        if !self.inner.mounted.swap(false, Ordering::SeqCst) {
            return;
        }
        self.inner.notify.notify_waiters();
        let children = std::mem::take(&mut *self.inner.children.lock());
        for child in children.iter().filter_map(Weak::upgrade) {
            MountGuard { inner: child }.unmount();
        }
    }

    /// Resolves once this guard is unmounted.
    pub async fn unmounted(&self) {
        // Register with Notify before checking the flag, otherwise an
        // unmount between the check and the await would be lost.
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if !self.is_mounted() {
            return;
        }
        notified.await;
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MountGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountGuard")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
