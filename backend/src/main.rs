//! Application entry-point: configuration from the environment, then server
//! start-up.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use directorio::outbound::persistence::{DbPool, PoolConfig};
use directorio::server::{ServerConfig, create_server};

fn session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

fn bind_addr() -> std::io::Result<SocketAddr> {
    let host = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".into());
    format!("{host}:{port}")
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr()?);

    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set, serving the in-memory fixture catalogue");
        }
    }

    if let Ok(static_dir) = env::var("STATIC_DIR") {
        config = config.with_static_dir(static_dir);
    }

    info!(addr = %config.bind_addr(), "starting server");
    create_server(config)?.await
}
