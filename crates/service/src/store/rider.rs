use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::rider::Model as Rider;

use crate::db::rider_service;
use crate::errors::ServiceError;

/// Persistence for riders. Lookups by id return `Ok(None)` when nothing matches.
#[async_trait]
pub trait RiderStore: Send + Sync {
    async fn create(&self, first_name: &str, last_name: &str, age: i32) -> Result<Rider, ServiceError>;
    async fn list(&self) -> Result<Vec<Rider>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Rider>, ServiceError>;
    async fn update_names(&self, id: Uuid, first_name: Option<&str>, last_name: Option<&str>) -> Result<Option<Rider>, ServiceError>;
    async fn add_score(&self, id: Uuid, score: f64) -> Result<Option<Rider>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Rider>, ServiceError>;
}

/// SeaORM-backed rider store.
pub struct SeaOrmRiderStore {
    pub db: DatabaseConnection,
}

impl SeaOrmRiderStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RiderStore for SeaOrmRiderStore {
    #[instrument(skip(self))]
    async fn create(&self, first_name: &str, last_name: &str, age: i32) -> Result<Rider, ServiceError> {
        let r = rider_service::create_rider(&self.db, first_name, last_name, age).await?;
        info!(id = %r.id, "rider_created");
        Ok(r)
    }

    async fn list(&self) -> Result<Vec<Rider>, ServiceError> {
        let riders = rider_service::list_riders(&self.db).await?;
        debug!(count = riders.len(), "riders_listed");
        Ok(riders)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Rider>, ServiceError> {
        rider_service::get_rider(&self.db, id).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn update_names(&self, id: Uuid, first_name: Option<&str>, last_name: Option<&str>) -> Result<Option<Rider>, ServiceError> {
        let updated = rider_service::update_rider_names(&self.db, id, first_name, last_name).await?;
        if updated.is_some() { info!("rider_renamed"); }
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn add_score(&self, id: Uuid, score: f64) -> Result<Option<Rider>, ServiceError> {
        let updated = rider_service::add_rider_score(&self.db, id, score).await?;
        if let Some(r) = &updated { info!(scores = r.score.len(), "rider_score_added"); }
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: Uuid) -> Result<Option<Rider>, ServiceError> {
        let deleted = rider_service::delete_rider(&self.db, id).await?;
        if deleted.is_some() { info!("rider_deleted"); }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn store_object_roundtrip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let store: Arc<dyn RiderStore> = Arc::new(SeaOrmRiderStore::new(t.db.clone()));

        let r = store.create("Valentino", "Rossi", 45).await?;
        let scored = store.add_score(r.id, 25.0).await?.unwrap();
        let again = store.add_score(r.id, 25.0).await?.unwrap();
        assert_eq!(scored.score, again.score);
        assert_eq!(serde_json::to_value(&again)?["score"], serde_json::json!([25]));

        assert!(store.delete(r.id).await?.is_some());
        assert!(store.delete(r.id).await?.is_none());
        assert!(store.get(r.id).await?.is_none());

        t.cleanup().await;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_score_additions_all_land() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let store: Arc<dyn RiderStore> = Arc::new(SeaOrmRiderStore::new(t.db.clone()));
        let r = store.create("Pecco", "Bagnaia", 27).await?;

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.add_score(r.id, i as f64).await }));
        }
        for h in handles {
            assert!(h.await??.is_some());
        }
        // repeating a value already present is still a no-op
        let again = store.add_score(r.id, 3.0).await?.unwrap();
        assert_eq!(again.score.len(), 16);
        let mut values: Vec<f64> = again.score.values().collect();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, (0..16).map(|i| i as f64).collect::<Vec<_>>());

        t.cleanup().await;
        Ok(())
    }
}
