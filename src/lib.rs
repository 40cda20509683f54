//! Client library for the yoga session booking API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::session` owns the login state. `guards` and `net::interceptor` read
//! it on every navigation and every outgoing request, `net` talks to the REST
//! authority, and `flows` wires those pieces into the user workflows that the
//! `yoga-cli` binary drives.

pub mod config;
pub mod error;
pub mod flows;
pub mod guards;
pub mod net;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ClientConfig;
pub use error::ApiError;
pub use state::session::{LoginFeed, SessionStore};
