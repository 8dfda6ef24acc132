//! URL record entity representing an alias→URL mapping.

/// A persisted mapping from a unique alias to its target URL.
///
/// Records are immutable: they are created once and later deleted, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}
