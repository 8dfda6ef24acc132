//! Storage capability traits for the domain layer.
//!
//! Handlers are written against these narrow traits rather than a concrete
//! store. Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! - [`UrlSaver`] - create a mapping
//! - [`UrlGetter`] - resolve an alias
//! - [`UrlDeleter`] - remove a mapping
//! - [`HealthProbe`] - reachability check
//!
//! [`UrlStorage`] bundles all of them for the router.

pub mod url_repository;

pub use url_repository::{HealthProbe, UrlDeleter, UrlGetter, UrlSaver, UrlStorage};

#[cfg(test)]
pub use url_repository::{MockHealthProbe, MockUrlDeleter, MockUrlGetter, MockUrlSaver};
