//! Route guards over the login state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation layer asks a guard before entering a route. A guard only
//! reads the session store; on rejection it issues exactly one redirect
//! through the [`Navigator`], on acceptance it does nothing.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use std::sync::Arc;

use crate::routes;
use crate::state::session::SessionStore;

/// The one navigation operation guards and workflows need.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}

/// A predicate consulted before a route transition completes.
pub trait RouteGuard {
    fn can_activate(&self) -> bool;
}

/// Allows navigation only with an active session; otherwise redirects to
/// [`routes::LOGIN`].
#[derive(Debug, Clone)]
pub struct AuthGuard<N> {
    store: SessionStore,
    navigator: N,
}

impl<N: Navigator> AuthGuard<N> {
    pub fn new(store: SessionStore, navigator: N) -> Self {
        Self { store, navigator }
    }
}

impl<N: Navigator> RouteGuard for AuthGuard<N> {
    fn can_activate(&self) -> bool {
        if self.store.is_logged() {
            return true;
        }
        tracing::debug!(redirect = routes::LOGIN, "auth guard rejected navigation");
        self.navigator.navigate(routes::LOGIN);
        false
    }
}

/// Allows navigation only without a session (login and register pages);
/// otherwise redirects to the landing route [`routes::SESSIONS`].
#[derive(Debug, Clone)]
pub struct UnauthGuard<N> {
    store: SessionStore,
    navigator: N,
}

impl<N: Navigator> UnauthGuard<N> {
    pub fn new(store: SessionStore, navigator: N) -> Self {
        Self { store, navigator }
    }
}

impl<N: Navigator> RouteGuard for UnauthGuard<N> {
    fn can_activate(&self) -> bool {
        if !self.store.is_logged() {
            return true;
        }
        tracing::debug!(redirect = routes::SESSIONS, "unauth guard rejected navigation");
        self.navigator.navigate(routes::SESSIONS);
        false
    }
}
