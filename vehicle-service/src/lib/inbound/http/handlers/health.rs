use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

const SERVICE_NAME: &str = "Vehicle Management API";
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root() -> ApiSuccess<RootResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        RootResponseData {
            message: SERVICE_NAME,
            version: VERSION,
            status: "running",
        },
    )
}

/// Always 200; the store state is reported in the body.
pub async fn health(State(state): State<AppState>) -> ApiSuccess<HealthResponseData> {
    let database = if state.store_health.ping().await {
        "connected"
    } else {
        "unavailable"
    };

    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "ok",
            version: VERSION,
            database,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponseData {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}
