//! # Model Layer
//!
//! Persistent entities and their access layer.

pub mod store;
