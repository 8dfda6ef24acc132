//! Helpers shared by handlers and storage.
//!
//! - [`alias`] - Alias generation and validation
//! - [`db_error`] - Driver error classification
//! - [`extract`] - Request context and path extractors

pub mod alias;
pub mod db_error;
pub mod extract;
