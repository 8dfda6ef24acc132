//! Handler for creating alias→URL mappings.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::{debug, error, info};
use validator::Validate;

use crate::api::dto::{Response, SaveRequest, SaveResponse};
use crate::domain::repositories::UrlSaver;
use crate::error::StorageError;
use crate::state::AliasPolicy;
use crate::utils::alias::{generate_alias, validate_alias};
use crate::utils::extract::RequestContext;

const OP: &str = "handlers.url.save";

/// Saves a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long", "alias": "promo" }
/// ```
///
/// `alias` is optional; when absent or empty a random alphanumeric alias of
/// [`AliasPolicy::length`] characters is generated. Generated aliases that
/// collide are regenerated up to [`AliasPolicy::max_attempts`] times.
///
/// # Responses
///
/// Always `200 OK`:
///
/// - `{"status":"OK","alias":"promo"}`
/// - `{"status":"Error","error":"failed to decode request"}`
/// - `{"status":"Error","error":"field url is not a valid URL"}` (validation)
/// - `{"status":"Error","error":"alias is reserved"}` (alias rules)
/// - `{"status":"Error","error":"url already exists"}`
/// - `{"status":"Error","error":"failed to add url"}`
pub async fn save_url_handler<S>(
    State(saver): State<Arc<S>>,
    State(policy): State<AliasPolicy>,
    ctx: RequestContext,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Json<SaveResponse>
where
    S: UrlSaver + ?Sized,
{
    let request_id = ctx.request_id.as_str();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!(op = OP, request_id, error = %rejection, "failed to decode request body");
            return Json(Response::error("failed to decode request").into());
        }
    };

    debug!(op = OP, request_id, url = %request.url, alias = ?request.alias, "request body decoded");

    if let Err(errors) = request.validate() {
        info!(op = OP, request_id, error = %errors, "invalid request");
        return Json(Response::validation_error(&errors).into());
    }

    let custom_alias = request.alias.filter(|alias| !alias.is_empty());

    let result = match custom_alias {
        Some(alias) => {
            if let Err(err) = validate_alias(&alias) {
                info!(op = OP, request_id, alias = %alias, error = %err, "invalid alias");
                return Json(Response::error(err.to_string()).into());
            }

            let saved = saver.save_url(&request.url, &alias).await;
            saved.map(|id| (id, alias))
        }
        None => save_with_generated_alias(saver.as_ref(), &request.url, policy, request_id).await,
    };

    match result {
        Ok((id, alias)) => {
            info!(op = OP, request_id, id, alias = %alias, "url added");
            Json(SaveResponse::ok(alias))
        }
        Err(err) if err.is_url_exists() => {
            info!(op = OP, request_id, url = %request.url, "url already exists");
            Json(Response::error("url already exists").into())
        }
        Err(err) => {
            error!(op = OP, request_id, error = %err, "failed to add url");
            Json(Response::error("failed to add url").into())
        }
    }
}

/// Retries collisions on generated aliases; the unique constraint is the only
/// existence check.
async fn save_with_generated_alias<S>(
    saver: &S,
    url: &str,
    policy: AliasPolicy,
    request_id: &str,
) -> Result<(i64, String), StorageError>
where
    S: UrlSaver + ?Sized,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let alias = generate_alias(policy.length);

        match saver.save_url(url, &alias).await {
            Ok(id) => return Ok((id, alias)),
            Err(err) if err.is_url_exists() && attempt < attempts => {
                debug!(op = OP, request_id, alias = %alias, attempt, "generated alias collided");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
