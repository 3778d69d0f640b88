//! Observable application-state store.

use tokio::sync::watch;

use crate::session::state::{Action, AppState};

/// Single owner of [`AppState`]; all mutation goes through [`SessionStore::dispatch`].
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<AppState>,
}

impl SessionStore {
    pub fn new(initial: AppState) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "Dispatching state action");
        self.tx.send_modify(|state| state.apply(action));
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
