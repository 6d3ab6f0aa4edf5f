use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::VehicleRequest;
use super::VehicleResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_vehicle(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    body: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<ApiSuccess<VehicleResponseData>, ApiError> {
    let Json(body) = body?;
    let details = body.try_into_details()?;

    let vehicle = state.vehicle_service.create_vehicle(details).await?;
    tracing::info!(
        vehicle_id = %vehicle.id,
        user_id = %current.user.id,
        "Vehicle created by user"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&vehicle).into()))
}
