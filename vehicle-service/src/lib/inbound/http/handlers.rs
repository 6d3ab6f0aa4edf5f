use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::errors::VehicleFieldError;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleDetails;
use crate::domain::vehicle::models::VehicleField;
use crate::domain::vehicle::models::VehicleId;

pub mod auth_info;
pub mod create_vehicle;
pub mod delete_vehicle;
pub mod get_vehicle;
pub mod health;
pub mod list_vehicles;
pub mod login;
pub mod register_user;
pub mod update_vehicle;

/// Successful JSON response; the payload is the body itself.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP-facing error taxonomy.
///
/// Every variant renders as `{"detail": ..., "code": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    Conflict(String),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Conflict(_) => "conflict",
            ApiError::Unauthorized(_) => "auth_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::InternalServerError(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let detail = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed with an internal error");
                "Internal server error".to_string()
            }
            ApiError::Validation(msg)
            | ApiError::Conflict(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg) => msg,
        };

        (status, Json(ApiErrorData { detail, code })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub detail: String,
    pub code: &'static str,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest(rejection.body_text()),
            _ => ApiError::Validation(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::Validation(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameTaken(_)
            | UserError::EmailTaken(_)
            | UserError::RegistrationConflict(_) => ApiError::Conflict(err.to_string()),
            UserError::Duplicate { .. } => ApiError::Conflict(
                UserError::RegistrationConflict(None).to_string(),
            ),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Hashing(_) | UserError::Token(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::InvalidField(_) | VehicleError::InvalidPage(_) => {
                ApiError::Validation(err.to_string())
            }
            VehicleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            VehicleError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleResponseData {
    pub id: String,
    pub brand: String,
    pub arrival_location: String,
    pub applicant: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Vehicle> for VehicleResponseData {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            brand: vehicle.brand.as_str().to_string(),
            arrival_location: vehicle.arrival_location.as_str().to_string(),
            applicant: vehicle.applicant.as_str().to_string(),
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// HTTP request body shared by vehicle creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VehicleRequest {
    brand: String,
    arrival_location: String,
    applicant: String,
}

impl VehicleRequest {
    fn try_into_details(self) -> Result<VehicleDetails, VehicleFieldError> {
        Ok(VehicleDetails {
            brand: VehicleField::brand(self.brand)?,
            arrival_location: VehicleField::arrival_location(self.arrival_location)?,
            applicant: VehicleField::applicant(self.applicant)?,
        })
    }
}

impl From<VehicleFieldError> for ApiError {
    fn from(err: VehicleFieldError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Path ids that are not UUIDs cannot name a stored vehicle.
fn parse_vehicle_id(raw: &str) -> Result<VehicleId, ApiError> {
    VehicleId::from_string(raw).map_err(|e| {
        tracing::debug!(vehicle_id = %raw, error = %e, "Rejected malformed vehicle id");
        ApiError::NotFound(VehicleError::NotFound(raw.to_string()).to_string())
    })
}
