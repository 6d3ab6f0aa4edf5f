use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::vehicle::errors::PageError;
use crate::domain::vehicle::errors::VehicleFieldError;
use crate::domain::vehicle::errors::VehicleIdError;

/// Vehicle record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: VehicleField,
    pub arrival_location: VehicleField,
    pub applicant: VehicleField,
    pub created_at: DateTime<Utc>,
    /// `None` until the record is first updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Replace the descriptive fields, stamping `updated_at`.
    pub fn apply(&mut self, details: VehicleDetails, now: DateTime<Utc>) {
        self.brand = details.brand;
        self.arrival_location = details.arrival_location;
        self.applicant = details.applicant;
        self.updated_at = Some(now);
    }
}

/// Vehicle unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub Uuid);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a vehicle ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, VehicleIdError> {
        Uuid::parse_str(s)
            .map(VehicleId)
            .map_err(|e| VehicleIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Required free-text vehicle attribute.
///
/// Trimmed, non-empty and at most 120 characters (the column width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleField(String);

impl VehicleField {
    const MAX_LENGTH: usize = 120;

    pub fn brand(value: String) -> Result<Self, VehicleFieldError> {
        Self::new("Brand", value)
    }

    pub fn arrival_location(value: String) -> Result<Self, VehicleFieldError> {
        Self::new("Arrival location", value)
    }

    pub fn applicant(value: String) -> Result<Self, VehicleFieldError> {
        Self::new("Applicant", value)
    }

    /// # Errors
    /// * `Empty` - Nothing left after trimming
    /// * `TooLong` - More than 120 characters after trimming
    pub fn new(field: &'static str, value: String) -> Result<Self, VehicleFieldError> {
        let value = value.trim();
        let length = value.chars().count();

        if length == 0 {
            Err(VehicleFieldError::Empty { field })
        } else if length > Self::MAX_LENGTH {
            Err(VehicleFieldError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated descriptive fields, used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetails {
    pub brand: VehicleField,
    pub arrival_location: VehicleField,
    pub applicant: VehicleField,
}

/// Limit/offset window over the vehicle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// # Errors
    /// * `InvalidLimit` - Limit outside 1 to 100
    /// * `NegativeOffset` - Offset below zero
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, PageError> {
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        let offset = offset.unwrap_or(0);

        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(PageError::InvalidLimit {
                min: 1,
                max: Self::MAX_LIMIT,
                actual: limit,
            });
        }

        if offset < 0 {
            return Err(PageError::NegativeOffset(offset));
        }

        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
