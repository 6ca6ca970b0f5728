//! # Auth Handler Tests
//!
//! Test suite for the signup, login, and logout endpoints, driven through
//! the full router so the middleware stack is exercised too.

mod integration;

use super::*;
use crate::test_support::*;

use axum::body::Body;
use axum::http::Request;
use shared::ErrorResponse;
use tower::ServiceExt;
