//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite implementation of the domain storage traits

pub mod persistence;
