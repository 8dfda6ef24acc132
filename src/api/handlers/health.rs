//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::api::dto::Response;
use crate::domain::repositories::HealthProbe;

/// Reports whether the storage answers.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK** `{"status":"OK"}`: storage reachable
/// - **503 Service Unavailable** `{"status":"Error","error":"storage unavailable"}`
pub async fn health_handler<H>(
    State(probe): State<Arc<H>>,
) -> Result<Json<Response>, (StatusCode, Json<Response>)>
where
    H: HealthProbe + ?Sized,
{
    match probe.ping().await {
        Ok(()) => Ok(Json(Response::ok())),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Response::error("storage unavailable")),
            ))
        }
    }
}
