//! Admin-only create / edit form for sessions.
//!
//! DESIGN
//! ======
//! The form works on a [`SessionDraft`] (the four user-editable fields). When
//! opened on an edit route it loads the stored session and keeps its
//! participant list so an update does not drop anyone.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use time::{Date, OffsetDateTime};

use crate::error::ApiError;
use crate::flows::{Notifier, validate};
use crate::guards::Navigator;
use crate::net::Services;
use crate::net::types::{Session, Teacher};
use crate::routes;
use crate::state::session::SessionStore;

pub const SESSION_CREATED: &str = "Session created !";
pub const SESSION_UPDATED: &str = "Session updated !";

/// The user-editable fields of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub name: String,
    pub description: String,
    pub date: Date,
    pub teacher_id: u64,
}

impl SessionDraft {
    /// Payload for create/update.
    ///
    /// The date goes out in the same RFC 3339 form the server returns for
    /// [`Session::date`] (midnight UTC), not as a bare `YYYY-MM-DD`. `users`
    /// is sent as well: an update carries the stored participant list so
    /// editing a session never clears who joined it.
    #[must_use]
    pub fn to_session(&self, users: Vec<u64>) -> Session {
        Session {
            id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            date: self.date.midnight().assume_utc(),
            teacher_id: self.teacher_id,
            users,
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<&Session> for SessionDraft {
    fn from(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            description: session.description.clone(),
            date: session.date.date(),
            teacher_id: session.teacher_id,
        }
    }
}

#[derive(Debug, Clone)]
enum Mode {
    Create,
    Update { session_id: u64, users: Vec<u64> },
}

#[derive(Debug, Clone)]
pub struct SessionForm {
    services: Services,
    mode: Mode,
    draft: Option<SessionDraft>,
}

impl SessionForm {
    /// Open the form for `url`. Non-admins are sent to the session list and
    /// get `Ok(None)`. An edit url (`/sessions/update/{id}`) loads the stored
    /// session into the draft.
    ///
    /// # Errors
    ///
    /// [`ApiError::Invalid`] for an edit url without a numeric id, otherwise
    /// the service error from loading the session.
    pub async fn open<N: Navigator>(
        services: &Services,
        store: &SessionStore,
        navigator: N,
        url: &str,
    ) -> Result<Option<Self>, ApiError> {
        if !store.is_admin() {
            tracing::debug!(url, "session form requires admin");
            navigator.navigate(routes::SESSIONS_PAGE);
            return Ok(None);
        }

        if !url.contains("update") {
            return Ok(Some(Self { services: services.clone(), mode: Mode::Create, draft: None }));
        }

        let session_id = parse_session_id(url)?;
        let session = services.sessions.detail(session_id).await?;
        Ok(Some(Self {
            services: services.clone(),
            draft: Some(SessionDraft::from(&session)),
            mode: Mode::Update { session_id, users: session.users },
        }))
    }

    #[must_use]
    pub fn on_update(&self) -> bool {
        matches!(self.mode, Mode::Update { .. })
    }

    /// The stored values when editing, `None` for a blank create form.
    #[must_use]
    pub fn draft(&self) -> Option<&SessionDraft> {
        self.draft.as_ref()
    }

    /// Teachers offered in the form's teacher picker.
    ///
    /// # Errors
    ///
    /// Returns the service error unchanged.
    pub async fn teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.services.teachers.all().await
    }

    /// Create or update from `draft`, tell the user, and return to the list.
    ///
    /// # Errors
    ///
    /// Validation and service failures, with no toast and no navigation.
    pub async fn submit<N: Navigator, T: Notifier>(
        &self,
        draft: &SessionDraft,
        navigator: N,
        notifier: T,
    ) -> Result<Session, ApiError> {
        validate::session_fields(&draft.name, &draft.description)?;
        let (saved, message) = match &self.mode {
            Mode::Create => (self.services.sessions.create(&draft.to_session(Vec::new())).await?, SESSION_CREATED),
            Mode::Update { session_id, users } => (
                self.services
                    .sessions
                    .update(*session_id, &draft.to_session(users.clone()))
                    .await?,
                SESSION_UPDATED,
            ),
        };
        notifier.notify(message);
        navigator.navigate(routes::SESSIONS);
        Ok(saved)
    }
}

fn parse_session_id(url: &str) -> Result<u64, ApiError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or(ApiError::Invalid { field: "id", reason: "is not a session id" })
}

/// Today's date in UTC, the default for a blank draft.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
