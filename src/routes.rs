//! Top-level router combining URL routes with the middleware stack.
//!
//! # Middleware (outermost first)
//!
//! - **Path normalization** - Trailing slash trimming
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - `500` with the opaque error envelope
//! - **Timeout** - `408` once the request exceeds the configured limit

use axum::Router;
use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::middleware::auth::BasicCredentials;
use crate::api::middleware::{recovery, request_id, tracing};
use crate::api::routes::url_routes;
use crate::domain::repositories::UrlStorage;
use crate::state::{AliasPolicy, AppState};

/// Router settings that are not part of handler state.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub credentials: Option<BasicCredentials>,
    pub request_timeout: Duration,
    pub alias_policy: AliasPolicy,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            credentials: None,
            request_timeout: Duration::from_secs(4),
            alias_policy: AliasPolicy::default(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// `storage` is shared by every request; it is the only shared resource.
pub fn app_router<S>(storage: Arc<S>, options: RouterOptions) -> NormalizePath<Router>
where
    S: UrlStorage,
{
    NormalizePathLayer::trim_trailing_slash().layer(router(storage, options))
}

/// Same as [`app_router`] without path normalization, for mounting in tests
/// or under another router.
pub fn router<S>(storage: Arc<S>, options: RouterOptions) -> Router
where
    S: UrlStorage,
{
    let state = AppState::new(storage, options.alias_policy);

    url_routes::<S>(options.credentials)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            options.request_timeout,
        ))
        .layer(recovery::layer())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}
