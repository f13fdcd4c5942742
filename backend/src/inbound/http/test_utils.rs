//! Shared scaffolding for handler tests.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Cookie-session middleware for tests: throwaway key, `Secure` flag off so
/// plain-HTTP test requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    let key = Key::generate();
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_secure(false)
        .build()
}
