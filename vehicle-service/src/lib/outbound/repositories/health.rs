use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::health::StoreHealth;

pub struct PostgresStoreHealth {
    pool: PgPool,
}

impl PostgresStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PostgresStoreHealth {
    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health probe failed");
                false
            }
        }
    }
}
