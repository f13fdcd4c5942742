//! HTTP inbound adapter exposing the server-rendered pages and the
//! favorites JSON endpoints.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod favorites;
pub mod pages;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
