//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) static_dir: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration with the given session and binding
    /// settings. Static assets default to `./static`.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server falls back to in-memory fixture repositories,
    /// which is the mode integration tests run in.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the directory served under `/static`.
    #[must_use]
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
