//! Networking: HTTP plumbing, request decoration, REST services and DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` executes requests, `interceptor` attaches the bearer credential,
//! `auth` / `sessions` / `teachers` / `users` map one method to one REST call,
//! and `types` defines the wire schema.

pub mod auth;
pub mod client;
pub mod interceptor;
pub mod sessions;
pub mod teachers;
pub mod types;
pub mod users;

use auth::AuthService;
use client::ApiClient;
use sessions::SessionApiService;
use teachers::TeacherService;
use users::UserService;

/// Every REST service, sharing one client (and so one session store).
#[derive(Clone, Debug)]
pub struct Services {
    pub auth: AuthService,
    pub sessions: SessionApiService,
    pub teachers: TeacherService,
    pub users: UserService,
}

impl Services {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            sessions: SessionApiService::new(client.clone()),
            teachers: TeacherService::new(client.clone()),
            users: UserService::new(client),
        }
    }
}
