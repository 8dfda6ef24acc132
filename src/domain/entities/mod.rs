//! Core domain entities representing the business data model.
//!
//! - [`UrlRecord`] - A persisted alias→URL mapping

pub mod url_record;

pub use url_record::UrlRecord;
