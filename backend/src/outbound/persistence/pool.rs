//! bb8-backed connection pool for `diesel-async` PostgreSQL connections.
//!
//! Checkout is async and bounded by `checkout_timeout`; every failure mode
//! collapses into a [`PoolError`] the repositories can map onto their port
//! error enums.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the checkout timeout.
    #[error("connection checkout failed: {message}")]
    Checkout { message: String },

    /// The pool itself could not be constructed.
    #[error("pool construction failed: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool sizing and timeout knobs, with defaults suitable for a small
/// service: 10 connections, 2 kept idle, 30 second checkout timeout.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_size: u32,
    pub min_idle: Option<u32>,
    pub checkout_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            checkout_timeout: Duration::from_secs(30),
        }
    }
}

/// Cloneable handle over the shared bb8 pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool from the given configuration.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(|error| PoolError::build(error.to_string()))?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when no connection becomes available
    /// within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|error| PoolError::checkout(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_starts_from_small_service_defaults() {
        let config = PoolConfig::new("postgres://localhost/directorio");

        assert_eq!(config.database_url, "postgres://localhost/directorio");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.checkout_timeout, Duration::from_secs(30));
    }

    #[test]
    fn errors_carry_their_message() {
        assert!(
            PoolError::checkout("connection refused")
                .to_string()
                .contains("connection refused")
        );
        assert!(PoolError::build("bad url").to_string().contains("bad url"));
    }
}
