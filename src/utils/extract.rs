//! Request-scoped extractors used by the URL handlers.
//!
//! Both extractors are infallible: a missing request id or path segment is
//! reported as an empty string and handled by the caller.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;
use tower_http::request_id::RequestId;

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request context supplied by the surrounding middleware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Identifier set by `SetRequestIdLayer`, or sent by the client.
    pub request_id: String,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(RequestId::header_value)
            .or_else(|| parts.headers.get(REQUEST_ID_HEADER))
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Self { request_id })
    }
}

/// The `alias` path parameter, empty when the matched route has none or the
/// segment does not decode (logged at debug level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(pub String);

impl<S> FromRequestParts<S> for Alias
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let alias = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(mut params)) => params.remove("alias").unwrap_or_default(),
            Err(rejection) => {
                tracing::debug!(
                    error = %rejection,
                    path = %parts.uri.path(),
                    "alias path rejected"
                );
                String::new()
            }
        };

        Ok(Self(alias))
    }
}
