//! Panic recovery middleware.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as HttpResponse},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::Response;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> HttpResponse;

/// Turns a panicking handler into a `500` with the opaque error envelope.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> HttpResponse {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic message"
    };

    tracing::error!(panic = details, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Response::error("internal error")),
    )
        .into_response()
}
