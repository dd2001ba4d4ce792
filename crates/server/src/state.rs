use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::store::{MotorcycleStore, RiderStore, SeaOrmMotorcycleStore, SeaOrmRiderStore};

/// Shared handler state: one store per collection.
#[derive(Clone)]
pub struct AppState {
    pub riders: Arc<dyn RiderStore>,
    pub motorcycles: Arc<dyn MotorcycleStore>,
}

impl AppState {
    /// Build both stores over the same pooled connection.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            riders: Arc::new(SeaOrmRiderStore::new(db.clone())),
            motorcycles: Arc::new(SeaOrmMotorcycleStore::new(db)),
        }
    }
}
