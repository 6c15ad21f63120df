//! Authentication middleware for session token validation

use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Authenticated subject extracted from a validated token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
}

/// Authentication middleware
///
/// Rejects the request with 401 unless a well-formed, correctly signed,
/// unexpired bearer token is present. On success the subject is placed in
/// the request extensions for downstream handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    // Check if it's a Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    // Validate the token through the service held in state
    let claims = state.jwt_service.validate_token(token).map_err(|e| {
        error!("Failed to validate token: {}", e);
        ApiError::Unauthorized
    })?;

    // Insert the authenticated subject into the request extensions
    req.extensions_mut().insert(AuthUser {
        subject: claims.sub,
    });

    // Call the next service
    let response = next.run(req).await;

    Ok(response)
}
