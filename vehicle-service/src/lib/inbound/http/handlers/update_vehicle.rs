use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::parse_vehicle_id;
use super::ApiError;
use super::ApiSuccess;
use super::VehicleRequest;
use super::VehicleResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Full replacement of the descriptive fields.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<String>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<ApiSuccess<VehicleResponseData>, ApiError> {
    let vehicle_id = parse_vehicle_id(&vehicle_id)?;
    let Json(body) = body?;
    let details = body.try_into_details()?;

    let vehicle = state
        .vehicle_service
        .update_vehicle(vehicle_id, details)
        .await?;
    tracing::info!(
        vehicle_id = %vehicle.id,
        user_id = %current.user.id,
        "Vehicle updated by user"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&vehicle).into()))
}
