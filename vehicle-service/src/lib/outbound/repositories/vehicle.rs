use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::Page;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleField;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::ports::VehicleRepository;

pub struct PostgresVehicleRepository {
    pool: PgPool,
}

impl PostgresVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_vehicle(row: PgRow) -> Result<Vehicle, VehicleError> {
        let db = |e: sqlx::Error| VehicleError::DatabaseError(e.to_string());

        Ok(Vehicle {
            id: VehicleId(row.try_get("id").map_err(db)?),
            brand: VehicleField::brand(row.try_get("brand").map_err(db)?)?,
            arrival_location: VehicleField::arrival_location(
                row.try_get("arrival_location").map_err(db)?,
            )?,
            applicant: VehicleField::applicant(row.try_get("applicant").map_err(db)?)?,
            created_at: row.try_get("created_at").map_err(db)?,
            updated_at: row.try_get("updated_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn list(&self, page: Page) -> Result<Vec<Vehicle>, VehicleError> {
        let rows = sqlx::query(
            r#"
            SELECT id, brand, arrival_location, applicant, created_at, updated_at
            FROM vehicles
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_vehicle).collect()
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, VehicleError> {
        let row = sqlx::query(
            r#"
            SELECT id, brand, arrival_location, applicant, created_at, updated_at
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_vehicle).transpose()
    }

    async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError> {
        let row = sqlx::query(
            r#"
            INSERT INTO vehicles (id, brand, arrival_location, applicant, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, brand, arrival_location, applicant, created_at, updated_at
            "#,
        )
        .bind(vehicle.id.as_uuid())
        .bind(vehicle.brand.as_str())
        .bind(vehicle.arrival_location.as_str())
        .bind(vehicle.applicant.as_str())
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert vehicle");
            VehicleError::DatabaseError(e.to_string())
        })?;

        // Stored timestamps have microsecond precision
        Self::row_to_vehicle(row)
    }

    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError> {
        let row = sqlx::query(
            r#"
            UPDATE vehicles
            SET brand = $2, arrival_location = $3, applicant = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, brand, arrival_location, applicant, created_at, updated_at
            "#,
        )
        .bind(vehicle.id.as_uuid())
        .bind(vehicle.brand.as_str())
        .bind(vehicle.arrival_location.as_str())
        .bind(vehicle.applicant.as_str())
        .bind(vehicle.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?
        .ok_or_else(|| VehicleError::NotFound(vehicle.id.to_string()))?;

        Self::row_to_vehicle(row)
    }

    async fn delete(&self, id: VehicleId) -> Result<(), VehicleError> {
        let result = sqlx::query(
            r#"
            DELETE FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VehicleError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
