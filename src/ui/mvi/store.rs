//! Shared handle to a mounted store.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::Reducer;

/// The `(state, dispatch)` pair of one mounted store.
///
/// Clones share the same snapshot. The reducer is the only writer: every
/// [`dispatch`](Self::dispatch) runs `R::reduce` exactly once under the
/// store's write lock, so dispatches to one store are applied one at a time
/// in the order they were issued.
pub struct StoreHandle<R: Reducer> {
    tx: Arc<watch::Sender<R::State>>,
}

impl<R: Reducer> StoreHandle<R> {
    /// Create a store seeded from `initial`.
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Apply `intent` to the current snapshot.
    ///
    /// Subscribers are woken only when the resulting state differs from the
    /// previous one.
    pub fn dispatch(&self, intent: R::Intent) {
        tracing::debug!(store = R::NAME, ?intent, "dispatch");
        self.tx.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            let changed = next != *state;
            *state = next;
            changed
        });
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    /// Whether both handles point at the same mounted store.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tx, &other.tx)
    }
}

impl<R: Reducer> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<R: Reducer> fmt::Debug for StoreHandle<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("store", &R::NAME)
            .field("state", &*self.tx.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: i64,
    }

    impl UiState for Counter {}

    #[derive(Debug)]
    enum CounterIntent {
        Add(i64),
        Noop,
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        const NAME: &'static str = "counter";
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Add(n) => Counter {
                    value: state.value + n,
                },
                CounterIntent::Noop => state,
            }
        }
    }

    #[test]
    fn dispatch_applies_in_order() {
        let store = StoreHandle::<CounterReducer>::new(Counter::default());
        store.dispatch(CounterIntent::Add(2));
        store.dispatch(CounterIntent::Add(-5));
        assert_eq!(store.state().value, -3);
    }

    #[test]
    fn clones_share_snapshot() {
        let store = StoreHandle::<CounterReducer>::new(Counter::default());
        let other = store.clone();
        other.dispatch(CounterIntent::Add(1));
        assert_eq!(store.state().value, 1);
        assert!(store.same_store(&other));
    }

    #[test]
    fn separate_stores_are_isolated() {
        let a = StoreHandle::<CounterReducer>::new(Counter::default());
        let b = StoreHandle::<CounterReducer>::new(Counter::default());
        a.dispatch(CounterIntent::Add(7));
        assert_eq!(b.state().value, 0);
        assert!(!a.same_store(&b));
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let store = StoreHandle::<CounterReducer>::new(Counter::default());
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.dispatch(CounterIntent::Noop);
        assert!(!rx.has_changed().unwrap());

        store.dispatch(CounterIntent::Add(1));
        assert!(rx.has_changed().unwrap());
    }
}
