#![cfg(test)]
use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, sqlite_file_config};

/// Throw-away SQLite database with the schema applied. Each call gets its own file.
pub struct TestDb {
    pub db: DatabaseConnection,
    path: PathBuf,
}

impl TestDb {
    pub async fn cleanup(self) {
        let _ = self.db.close().await;
        let _ = std::fs::remove_file(&self.path);
    }
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("paddock_service_{}.db", uuid::Uuid::new_v4()));
    let db = connect_and_migrate(&sqlite_file_config(&path)).await?;
    Ok(TestDb { db, path })
}
