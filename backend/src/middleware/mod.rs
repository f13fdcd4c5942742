//! Actix middleware for the directory service.

pub mod trace;
