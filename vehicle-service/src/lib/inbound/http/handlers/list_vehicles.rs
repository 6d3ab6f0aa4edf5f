use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::VehicleResponseData;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::Page;
use crate::inbound::http::router::AppState;

pub async fn list_vehicles(
    State(state): State<AppState>,
    query: Result<Query<ListVehiclesQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<VehicleResponseData>>, ApiError> {
    let Query(query) = query?;
    let page = Page::new(query.limit, query.offset).map_err(VehicleError::from)?;

    state
        .vehicle_service
        .list_vehicles(page)
        .await
        .map_err(ApiError::from)
        .map(|vehicles| {
            ApiSuccess::new(
                StatusCode::OK,
                vehicles.iter().map(VehicleResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListVehiclesQuery {
    limit: Option<i64>,
    offset: Option<i64>,
}
