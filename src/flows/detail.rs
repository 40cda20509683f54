//! Session detail view: one session, its teacher, and the current user's
//! relation to it.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::error::ApiError;
use crate::flows::Notifier;
use crate::guards::Navigator;
use crate::net::Services;
use crate::net::types::{Session, Teacher};
use crate::routes;
use crate::state::session::SessionStore;

pub const SESSION_DELETED: &str = "Session deleted !";

/// Loaded detail of one session. `participate` / `un_participate` refresh it
/// from the server so the flags always reflect the stored participant list.
#[derive(Debug, Clone)]
pub struct SessionDetail {
    services: Services,
    store: SessionStore,
    pub session_id: u64,
    pub session: Session,
    pub teacher: Teacher,
    /// Whether the logged-in user is among the participants.
    pub is_participate: bool,
    pub is_admin: bool,
}

impl SessionDetail {
    /// Fetch the session, then its teacher.
    ///
    /// # Errors
    ///
    /// Any service error; nothing is kept on failure.
    pub async fn load(services: &Services, store: &SessionStore, session_id: u64) -> Result<Self, ApiError> {
        let (session, teacher) = fetch(services, session_id).await?;
        let mut detail = Self {
            services: services.clone(),
            store: store.clone(),
            session_id,
            session,
            teacher,
            is_participate: false,
            is_admin: false,
        };
        detail.refresh_flags();
        Ok(detail)
    }

    /// Join the session as the logged-in user, then reload.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingSession`] when logged out, otherwise the service error.
    pub async fn participate(&mut self) -> Result<(), ApiError> {
        let user_id = self.store.user_id().ok_or(ApiError::MissingSession)?;
        self.services.sessions.participate(self.session_id, user_id).await?;
        self.reload().await
    }

    /// Leave the session as the logged-in user, then reload.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingSession`] when logged out, otherwise the service error.
    pub async fn un_participate(&mut self) -> Result<(), ApiError> {
        let user_id = self.store.user_id().ok_or(ApiError::MissingSession)?;
        self.services.sessions.un_participate(self.session_id, user_id).await?;
        self.reload().await
    }

    /// Delete the session, tell the user, and return to the list.
    ///
    /// # Errors
    ///
    /// The service error, with no toast and no navigation.
    pub async fn delete<N: Navigator, T: Notifier>(self, navigator: N, notifier: T) -> Result<(), ApiError> {
        self.services.sessions.delete(self.session_id).await?;
        notifier.notify(SESSION_DELETED);
        navigator.navigate(routes::SESSIONS);
        Ok(())
    }

    /// Re-fetch session and teacher and recompute the flags.
    ///
    /// # Errors
    ///
    /// Any service error; the previous values are kept.
    pub async fn reload(&mut self) -> Result<(), ApiError> {
        let (session, teacher) = fetch(&self.services, self.session_id).await?;
        self.session = session;
        self.teacher = teacher;
        self.refresh_flags();
        Ok(())
    }

    fn refresh_flags(&mut self) {
        self.is_participate = self
            .store
            .user_id()
            .is_some_and(|user_id| self.session.has_participant(user_id));
        self.is_admin = self.store.is_admin();
    }
}

async fn fetch(services: &Services, session_id: u64) -> Result<(Session, Teacher), ApiError> {
    let session = services.sessions.detail(session_id).await?;
    let teacher = services.teachers.detail(session.teacher_id).await?;
    Ok((session, teacher))
}
