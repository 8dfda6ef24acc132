//! Request id middleware.
//!
//! Each request gets an `x-request-id` (a UUID unless the client sent one),
//! which is stored in the request extensions for
//! [`crate::utils::extract::RequestContext`] and echoed on the response.

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::utils::extract::REQUEST_ID_HEADER;

fn header_name() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Assigns a request id to incoming requests that do not carry one.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(header_name(), MakeRequestUuid)
}

/// Copies the request id onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(header_name())
}
