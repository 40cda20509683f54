//! User workflows built from the services, the session store and the
//! navigation/toast seams.
//!
//! DESIGN
//! ======
//! Each workflow takes its collaborators explicitly and performs side effects
//! in a fixed order (service call, store transition, toast, redirect). On any
//! failure the error is returned before the store, toast, or navigator is
//! touched, so callers can simply surface it.

pub mod account;
pub mod auth;
pub mod detail;
pub mod form;
pub mod validate;

use std::sync::Arc;

/// Short-lived user notification (a toast / snackbar).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
