use thiserror::Error;

/// Error for VehicleId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for vehicle text field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleFieldError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for list paging parameters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("limit must be between {min} and {max}, got {actual}")]
    InvalidLimit { min: i64, max: i64, actual: i64 },

    #[error("offset must not be negative, got {0}")]
    NegativeOffset(i64),
}

/// Top-level error type for all vehicle-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("{0}")]
    InvalidField(#[from] VehicleFieldError),

    #[error("{0}")]
    InvalidPage(#[from] PageError),

    #[error("Vehicle not found")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
