use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::TokenCodec;
use crate::error::ApiError;

/// Authenticated principal extracted from a verified bearer token.
///
/// Carries only what the token proves. Handlers that need the full user
/// record look it up themselves.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Bearer-token authentication middleware for principal-scoped routes.
///
/// Resolves the Authorization header to an [`AuthUser`] in the request
/// extensions, or answers 401 with the verification failure kind.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;

    let username = TokenCodec::from_config().verify(&token)?;

    request.extensions_mut().insert(AuthUser { username });

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err(ApiError::unauthorized("Empty bearer token")),
        None => Err(ApiError::unauthorized(
            "Authorization header must use Bearer token format",
        )),
    }
}
