//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only deal with domain-friendly
//! operations such as persisting the logged-in user or clearing the session.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, User, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USER_NAME_KEY: &str = "user_name";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id and display name in the cookie.
    pub fn persist_user(&self, user: &User) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user.id().to_string())
            .and_then(|()| self.0.insert(USER_NAME_KEY, user.name().as_ref()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(key)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Fetch the logged-in user id from the session, if present.
    ///
    /// A stored value that no longer parses as a user id reads as logged
    /// out rather than failing the request.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let Some(raw) = self.read(USER_ID_KEY)? else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                tracing::warn!("invalid user id in session cookie: {error}");
                Ok(None)
            }
        }
    }

    /// Fetch the logged-in user's display name, if present.
    pub fn user_name(&self) -> Result<Option<String>, Error> {
        self.read(USER_NAME_KEY)
    }

    /// Drop all session state, ending any login.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
