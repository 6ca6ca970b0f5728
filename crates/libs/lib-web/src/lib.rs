//! # Web Library
//!
//! HTTP handlers, middleware, and server setup for the auth API.

pub mod handlers;
pub mod middleware;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;

pub use server::{start_server, AppState, ServerConfig};
