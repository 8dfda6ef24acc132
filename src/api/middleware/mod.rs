//! HTTP middleware for request processing and protection.
//!
//! Provides request ids, panic recovery, basic authentication and observability.

pub mod auth;
pub mod recovery;
pub mod request_id;
pub mod tracing;
