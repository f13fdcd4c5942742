//! Directory of local businesses ("negocios") with user accounts and
//! favorites.
//!
//! The crate follows a hexagonal layout:
//! - [`domain`] holds entities, validation, services, and ports.
//! - [`inbound`] adapts HTTP requests onto the driving ports.
//! - [`outbound`] implements the driven ports against PostgreSQL.
//! - [`server`] wires configuration, state, and the actix-web server.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::trace::Trace;
