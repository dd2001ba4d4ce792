use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::motorcycle::Model as Motorcycle;

use crate::db::motorcycle_service;
use crate::errors::ServiceError;

/// Persistence for motorcycles. There is no update or delete.
#[async_trait]
pub trait MotorcycleStore: Send + Sync {
    async fn create(&self, manufacturer: &str, displacement: i32, weight: f64, rider_id: Uuid) -> Result<Motorcycle, ServiceError>;
    async fn list(&self) -> Result<Vec<Motorcycle>, ServiceError>;
    async fn find_by_rider(&self, rider_id: Uuid) -> Result<Vec<Motorcycle>, ServiceError>;
}

/// SeaORM-backed motorcycle store.
pub struct SeaOrmMotorcycleStore {
    pub db: DatabaseConnection,
}

impl SeaOrmMotorcycleStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl MotorcycleStore for SeaOrmMotorcycleStore {
    #[instrument(skip(self), fields(rider_id = %rider_id))]
    async fn create(&self, manufacturer: &str, displacement: i32, weight: f64, rider_id: Uuid) -> Result<Motorcycle, ServiceError> {
        // rider_id is stored as given; no lookup against riders
        let m = motorcycle_service::create_motorcycle(&self.db, manufacturer, displacement, weight, rider_id).await?;
        info!(id = %m.id, "motorcycle_created");
        Ok(m)
    }

    async fn list(&self) -> Result<Vec<Motorcycle>, ServiceError> {
        let all = motorcycle_service::list_motorcycles(&self.db).await?;
        debug!(count = all.len(), "motorcycles_listed");
        Ok(all)
    }

    async fn find_by_rider(&self, rider_id: Uuid) -> Result<Vec<Motorcycle>, ServiceError> {
        let owned = motorcycle_service::find_motorcycles_by_rider(&self.db, rider_id).await?;
        debug!(%rider_id, count = owned.len(), "motorcycles_by_rider");
        Ok(owned)
    }
}
