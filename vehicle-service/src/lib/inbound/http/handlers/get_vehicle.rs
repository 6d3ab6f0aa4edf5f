use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_vehicle_id;
use super::ApiError;
use super::ApiSuccess;
use super::VehicleResponseData;
use crate::inbound::http::router::AppState;

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<ApiSuccess<VehicleResponseData>, ApiError> {
    let vehicle_id = parse_vehicle_id(&vehicle_id)?;

    state
        .vehicle_service
        .get_vehicle(vehicle_id)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::OK, vehicle.into()))
}
