//! Shared state injected into every handler.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::utils::alias::DEFAULT_ALIAS_LENGTH;

/// How the save handler picks aliases when the caller gives none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    pub length: usize,
    /// Attempts before giving up when generated aliases keep colliding.
    pub max_attempts: usize,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: 10,
        }
    }
}

/// Router state over a storage backend `S`.
///
/// Handlers extract only the part they need: `State<Arc<S>>` for storage,
/// `State<AliasPolicy>` for alias generation.
pub struct AppState<S: ?Sized> {
    pub storage: Arc<S>,
    pub alias_policy: AliasPolicy,
}

impl<S: ?Sized> AppState<S> {
    pub fn new(storage: Arc<S>, alias_policy: AliasPolicy) -> Self {
        Self {
            storage,
            alias_policy,
        }
    }
}

impl<S: ?Sized> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            alias_policy: self.alias_policy,
        }
    }
}

impl<S: ?Sized> FromRef<AppState<S>> for Arc<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Arc::clone(&state.storage)
    }
}

impl<S: ?Sized> FromRef<AppState<S>> for AliasPolicy {
    fn from_ref(state: &AppState<S>) -> Self {
        state.alias_policy
    }
}
