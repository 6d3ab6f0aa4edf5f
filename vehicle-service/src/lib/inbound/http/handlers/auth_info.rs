use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Describes the authentication endpoints mounted under the API prefix.
pub async fn auth_info(State(state): State<AppState>) -> ApiSuccess<AuthInfoResponseData> {
    let base = format!("{}/auth", state.api_prefix);

    ApiSuccess::new(
        StatusCode::OK,
        AuthInfoResponseData {
            message: "Authentication API",
            endpoints: AuthEndpoints {
                register: format!("POST {}/register", base),
                login: format!("POST {}/login", base),
            },
            token_type: "bearer",
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthInfoResponseData {
    pub message: &'static str,
    pub endpoints: AuthEndpoints,
    pub token_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthEndpoints {
    pub register: String,
    pub login: String,
}
