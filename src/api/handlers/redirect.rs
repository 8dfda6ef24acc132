//! Handler for alias redirect.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response as HttpResponse},
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::dto::Response;
use crate::domain::repositories::UrlGetter;
use crate::utils::extract::{Alias, RequestContext};

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Responses
///
/// - `302 Found` with `Location: <target url>`
/// - `200 OK` `{"status":"Error","error":"invalid request"}` - empty alias
/// - `200 OK` `{"status":"Error","error":"not found"}` - unknown alias
/// - `200 OK` `{"status":"Error","error":"internal error"}` - storage failure
pub async fn redirect_handler<G>(
    State(getter): State<Arc<G>>,
    ctx: RequestContext,
    Alias(alias): Alias,
) -> HttpResponse
where
    G: UrlGetter + ?Sized,
{
    const OP: &str = "handlers.url.redirect";

    if alias.is_empty() {
        info!(op = OP, request_id = %ctx.request_id, "alias is empty");
        return Json(Response::error("invalid request")).into_response();
    }

    let target_url = match getter.get_url(&alias).await {
        Ok(url) => url,
        Err(err) if err.is_url_not_found() => {
            info!(op = OP, request_id = %ctx.request_id, alias = %alias, "url not found");
            return Json(Response::error("not found")).into_response();
        }
        Err(err) => {
            error!(op = OP, request_id = %ctx.request_id, error = %err, "failed to get url");
            return Json(Response::error("internal error")).into_response();
        }
    };

    let location = match HeaderValue::try_from(target_url.as_str()) {
        Ok(location) => location,
        Err(err) => {
            error!(op = OP, request_id = %ctx.request_id, alias = %alias, error = %err, "stored url is not a valid header value");
            return Json(Response::error("internal error")).into_response();
        }
    };

    info!(op = OP, request_id = %ctx.request_id, alias = %alias, url = %target_url, "redirecting");

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
