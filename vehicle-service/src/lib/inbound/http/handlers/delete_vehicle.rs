use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::parse_vehicle_id;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
) -> Result<ApiSuccess<DeleteVehicleResponseData>, ApiError> {
    let vehicle_id = parse_vehicle_id(&vehicle_id)?;

    state.vehicle_service.delete_vehicle(vehicle_id).await?;
    tracing::info!(
        vehicle_id = %vehicle_id,
        user_id = %current.user.id,
        "Vehicle deleted by user"
    );

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteVehicleResponseData { detail: "deleted" },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteVehicleResponseData {
    pub detail: &'static str,
}
