//! HTTP basic authentication middleware for write endpoints.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response as HttpResponse},
};
use axum_auth::AuthBasic;
use std::sync::Arc;

use crate::api::dto::Response;

/// Realm advertised in `WWW-Authenticate`.
const REALM: &str = r#"Basic realm="alias-shortener""#;

/// Username/password pair accepted by [`layer`].
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    user: Arc<str>,
    password: Arc<str>,
}

impl BasicCredentials {
    pub fn new(user: impl Into<Arc<str>>, password: impl Into<Arc<str>>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    fn matches(&self, user: &str, password: Option<&str>) -> bool {
        user == &*self.user && password == Some(&*self.password)
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// `401 Unauthorized` with the envelope body and a basic-auth challenge.
#[derive(Debug)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> HttpResponse {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, HeaderValue::from_static(REALM))],
            Json(Response::error("unauthorized")),
        )
            .into_response()
    }
}

/// Authenticates requests using the `Authorization: Basic ...` header.
///
/// # Errors
///
/// Returns [`Unauthorized`] if the header is missing, malformed, or carries
/// other credentials.
///
/// # Example
///
/// ```rust,ignore
/// let save = post(save_url_handler::<S>)
///     .route_layer(middleware::from_fn_with_state(credentials, auth::layer));
/// ```
pub async fn layer(
    State(credentials): State<BasicCredentials>,
    req: Request,
    next: Next,
) -> Result<HttpResponse, Unauthorized> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("Authorization header is missing or invalid");
            Unauthorized
        })?;

    if !credentials.matches(&user, password.as_deref()) {
        tracing::info!(user = %user, "Rejected basic auth credentials");
        return Err(Unauthorized);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match() {
        let credentials = BasicCredentials::new("admin", "secret");

        assert!(credentials.matches("admin", Some("secret")));
        assert!(!credentials.matches("admin", Some("wrong")));
        assert!(!credentials.matches("other", Some("secret")));
        assert!(!credentials.matches("admin", None));
    }

    #[test]
    fn test_debug_masks_password() {
        let credentials = BasicCredentials::new("admin", "secret");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }
}
