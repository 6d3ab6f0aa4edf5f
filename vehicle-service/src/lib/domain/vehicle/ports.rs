use async_trait::async_trait;

use super::errors::VehicleError;
use super::models::Page;
use super::models::Vehicle;
use super::models::VehicleDetails;
use super::models::VehicleId;

/// Port for vehicle domain service operations.
#[async_trait]
pub trait VehicleServicePort: Send + Sync + 'static {
    /// List vehicles in creation order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_vehicles(&self, page: Page) -> Result<Vec<Vehicle>, VehicleError>;

    /// Retrieve vehicle by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, VehicleError>;

    /// Create a new vehicle record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_vehicle(&self, details: VehicleDetails) -> Result<Vehicle, VehicleError>;

    /// Replace the descriptive fields of an existing vehicle.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_vehicle(
        &self,
        id: VehicleId,
        details: VehicleDetails,
    ) -> Result<Vehicle, VehicleError>;

    /// Remove a vehicle permanently.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_vehicle(&self, id: VehicleId) -> Result<(), VehicleError>;
}

/// Repository port for vehicle persistence operations.
#[async_trait]
pub trait VehicleRepository: Send + Sync + 'static {
    /// Page through vehicles ordered by `created_at`, then `id`.
    async fn list(&self, page: Page) -> Result<Vec<Vehicle>, VehicleError>;

    /// Vehicle if found, None otherwise.
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, VehicleError>;

    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError>;

    /// Persist changed fields of an existing vehicle.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: VehicleId) -> Result<(), VehicleError>;
}
