use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that validates the bearer token, resolves its subject to a
/// stored user and adds that user to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid authentication credentials".to_string())
    })?;

    let subject = claims.subject().ok_or_else(|| {
        tracing::warn!("Token carries no subject");
        ApiError::Unauthorized("Invalid token payload".to_string())
    })?;

    let user_id = UserId::from_string(subject).map_err(|e| {
        tracing::warn!(subject = %subject, error = %e, "Token subject is not a user id");
        user_not_found()
    })?;

    let user = state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => {
                tracing::warn!(user_id = %user_id, "Token subject no longer exists");
                user_not_found()
            }
            other => ApiError::from(other),
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn user_not_found() -> ApiError {
    ApiError::Unauthorized("User not found".to_string())
}

/// Token from an `Authorization: Bearer <token>` header; the scheme is
/// matched case-insensitively.
fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let not_authenticated = || ApiError::Unauthorized("Not authenticated".to_string());

    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(not_authenticated)?
        .to_str()
        .map_err(|_| not_authenticated())?;

    let (scheme, token) = auth_str.split_once(' ').ok_or_else(not_authenticated)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(not_authenticated());
    }

    Ok(token)
}
