use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::VehicleError;
use super::models::Page;
use super::models::Vehicle;
use super::models::VehicleDetails;
use super::models::VehicleId;
use super::ports::VehicleRepository;
use super::ports::VehicleServicePort;

/// Concrete implementation of VehicleServicePort.
///
/// Generic over repository for testability.
pub struct VehicleService<VR>
where
    VR: VehicleRepository,
{
    vehicle_repository: Arc<VR>,
}

impl<VR> VehicleService<VR>
where
    VR: VehicleRepository,
{
    pub fn new(vehicle_repository: Arc<VR>) -> Self {
        Self { vehicle_repository }
    }
}

#[async_trait]
impl<VR> VehicleServicePort for VehicleService<VR>
where
    VR: VehicleRepository,
{
    async fn list_vehicles(&self, page: Page) -> Result<Vec<Vehicle>, VehicleError> {
        self.vehicle_repository.list(page).await
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Vehicle, VehicleError> {
        self.vehicle_repository
            .find_by_id(id)
            .await?
            .ok_or(VehicleError::NotFound(id.to_string()))
    }

    async fn create_vehicle(&self, details: VehicleDetails) -> Result<Vehicle, VehicleError> {
        let vehicle = Vehicle {
            id: VehicleId::new(),
            brand: details.brand,
            arrival_location: details.arrival_location,
            applicant: details.applicant,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created = self.vehicle_repository.create(vehicle).await?;
        tracing::info!(vehicle_id = %created.id, "Vehicle created");

        Ok(created)
    }

    async fn update_vehicle(
        &self,
        id: VehicleId,
        details: VehicleDetails,
    ) -> Result<Vehicle, VehicleError> {
        let mut vehicle = self.get_vehicle(id).await?;
        vehicle.apply(details, Utc::now());

        let updated = self.vehicle_repository.update(vehicle).await?;
        tracing::info!(vehicle_id = %updated.id, "Vehicle updated");

        Ok(updated)
    }

    async fn delete_vehicle(&self, id: VehicleId) -> Result<(), VehicleError> {
        self.vehicle_repository.delete(id).await?;
        tracing::info!(vehicle_id = %id, "Vehicle deleted");

        Ok(())
    }
}
