//! Login state for the current user.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single owner of the session payload. Guards, the
//! request interceptor and workflows hold clones of the handle and either read
//! it or call `log_in` / `log_out`; there is no other mutation path.
//!
//! The login feed has latest-value semantics: a new `LoginFeed` first yields
//! the flag as it was at subscribe time, then every later transition in order.
//! Each feed owns an unbounded queue, so a slow reader never loses a
//! transition. Subscribing and transitioning both happen under the state lock,
//! so a feed can neither miss a transition nor see one twice.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::net::types::SessionInformation;

// =============================================================================
// SESSION STATE
// =============================================================================

/// Logged-in iff a payload is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(SessionInformation),
}

impl SessionState {
    fn is_logged(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    fn information(&self) -> Option<&SessionInformation> {
        match self {
            Self::LoggedIn(information) => Some(information),
            Self::LoggedOut => None,
        }
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// State plus the connected feeds: `subscribers` holds one sender per live
/// `LoginFeed`.
#[derive(Debug, Default)]
struct Hub {
    state: SessionState,
    subscribers: Vec<mpsc::UnboundedSender<bool>>,
}

impl Hub {
    /// Deliver `logged` to every feed, forgetting feeds that were dropped.
    fn publish(&mut self, logged: bool) {
        self.subscribers.retain(|tx| tx.send(logged).is_ok());
    }
}

/// Shared handle to the login state. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Hub>>,
}

impl SessionStore {
    /// A fresh store, logged out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session with `information`, replacing any previous one, and
    /// publish `true`.
    pub fn log_in(&self, information: SessionInformation) {
        let user_id = information.id;
        {
            let mut hub = self.write();
            hub.state = SessionState::LoggedIn(information);
            hub.publish(true);
        }
        tracing::info!(user_id, "session opened");
    }

    /// Discard the session and publish `false`. Publishes even when already
    /// logged out.
    pub fn log_out(&self) {
        let previous = {
            let mut hub = self.write();
            let previous = std::mem::take(&mut hub.state);
            hub.publish(false);
            previous
        };
        match previous.information() {
            Some(information) => tracing::info!(user_id = information.id, "session closed"),
            None => tracing::debug!("log out while already logged out"),
        }
    }

    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.read().state.is_logged()
    }

    /// Copy of the current payload, if logged in.
    #[must_use]
    pub fn session_information(&self) -> Option<SessionInformation> {
        self.read().state.information().cloned()
    }

    /// Id of the logged-in user.
    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.read().state.information().map(|information| information.id)
    }

    /// Whether the logged-in user is an administrator. `false` when logged out.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read().state.information().is_some_and(|information| information.admin)
    }

    /// `Authorization` header value for the current session.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.read().state.information().map(SessionInformation::authorization)
    }

    /// Subscribe to the login flag. The feed starts with the current value.
    #[must_use]
    pub fn subscribe(&self) -> LoginFeed {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut hub = self.write();
        // The receiver is alive, so seeding cannot fail.
        let _ = tx.send(hub.state.is_logged());
        hub.subscribers.push(tx);
        LoginFeed { rx }
    }

    fn read(&self) -> RwLockReadGuard<'_, Hub> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Hub> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// LOGIN FEED
// =============================================================================

/// Per-subscriber stream of login flags.
#[derive(Debug)]
pub struct LoginFeed {
    rx: mpsc::UnboundedReceiver<bool>,
}

impl LoginFeed {
    /// Wait for the next flag. Returns `None` only once every store handle has
    /// been dropped and the queue is drained.
    pub async fn recv(&mut self) -> Option<bool> {
        self.rx.recv().await
    }

    /// Next flag if one is already queued.
    pub fn try_recv(&mut self) -> Option<bool> {
        match self.rx.try_recv() {
            Ok(logged) => Some(logged),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Drain every queued flag without waiting.
    pub fn drain(&mut self) -> Vec<bool> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
