//! URL route configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    routing::{MethodRouter, delete, get, post},
};

use crate::api::dto::Response;
use crate::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, save_url_handler,
};
use crate::api::middleware::auth::{self, BasicCredentials};
use crate::domain::repositories::UrlStorage;
use crate::state::AppState;

/// URL routes over storage backend `S`.
///
/// # Endpoints
///
/// - `POST   /url`       - Save a URL (basic auth when configured)
/// - `DELETE /{alias}`   - Delete a mapping (basic auth when configured)
/// - `DELETE /`          - Empty alias; answers `invalid request`
/// - `GET    /{alias}`   - Redirect to the target URL
/// - `GET    /health`    - Storage health check
///
/// Other methods on these paths answer `405` and unmatched paths `404`, both
/// with the error envelope.
pub fn url_routes<S>(credentials: Option<BasicCredentials>) -> Router<AppState<S>>
where
    S: UrlStorage,
{
    let guard = |route: MethodRouter<AppState<S>>| match &credentials {
        Some(credentials) => route.route_layer(middleware::from_fn_with_state(
            credentials.clone(),
            auth::layer,
        )),
        None => route,
    };

    Router::new()
        .route("/health", get(health_handler::<S>))
        .route("/url", guard(post(save_url_handler::<S>)))
        .route(
            "/",
            get(redirect_handler::<S>).merge(guard(delete(delete_url_handler::<S>))),
        )
        .route(
            "/{alias}",
            get(redirect_handler::<S>).merge(guard(delete(delete_url_handler::<S>))),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn method_not_allowed() -> (StatusCode, Json<Response>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Response::error("method not allowed")),
    )
}

async fn not_found() -> (StatusCode, Json<Response>) {
    (StatusCode::NOT_FOUND, Json(Response::error("not found")))
}
