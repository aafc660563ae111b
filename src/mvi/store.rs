//! Observable state container.
//!
//! Wraps a [`tokio::sync::watch`] channel so consumers get both halves of
//! the observable contract: a cheap "current value" read and a change
//! notification stream, without coupling to any UI framework.

use tokio::sync::watch;

use super::reducer::Reducer;
use super::state::UiState;

/// Holds the current state snapshot and notifies subscribers on change.
///
/// Writers replace the snapshot wholesale; readers either poll [`get`]
/// for an eventually-consistent copy or hold a [`subscribe`] receiver and
/// await changes.
///
/// [`get`]: StateStore::get
/// [`subscribe`]: StateStore::subscribe
pub struct StateStore<S: UiState> {
    tx: watch::Sender<S>,
}

impl<S: UiState> StateStore<S> {
    /// Create a store seeded with the state's `Default`.
    pub fn new() -> Self {
        Self::with_initial(S::default())
    }

    /// Create a store seeded with an explicit initial snapshot.
    pub fn with_initial(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current snapshot.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Replace the snapshot via a pure transformation of the current value.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(S) -> S,
    {
        self.tx.send_modify(|state| *state = f(state.clone()));
    }

    /// Run an intent through a reducer and publish the resulting snapshot.
    pub fn apply<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        self.update(|state| R::reduce(state, intent));
    }

    /// Subscribe to change notifications.
    ///
    /// The receiver observes the snapshot current at subscription time and
    /// every replacement after it. Identical replacements still notify;
    /// subscribers that care can compare snapshots.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}

impl<S: UiState> Default for StateStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter {
        value: u32,
    }

    impl UiState for Counter {}

    #[test]
    fn get_returns_current_snapshot() {
        let store = StateStore::with_initial(Counter { value: 7 });
        assert_eq!(store.get(), Counter { value: 7 });
    }

    #[test]
    fn update_replaces_snapshot() {
        let store: StateStore<Counter> = StateStore::new();
        store.update(|c| Counter { value: c.value + 1 });
        store.update(|c| Counter { value: c.value + 1 });
        assert_eq!(store.get().value, 2);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store: StateStore<Counter> = StateStore::new();
        let mut rx = store.subscribe();
        store.update(|_| Counter { value: 42 });
        rx.changed().await.expect("store dropped");
        assert_eq!(rx.borrow().value, 42);
    }
}
