/// CRUD operations tests for all models
pub mod crud_tests;

use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db;

/// Fresh SQLite file per test, migrated with the real migrator.
pub(crate) async fn setup_test_db() -> anyhow::Result<(DatabaseConnection, PathBuf)> {
    let path = std::env::temp_dir().join(format!("paddock_models_{}.db", Uuid::new_v4()));
    let db = db::connect_and_migrate(&db::sqlite_file_config(&path)).await?;
    Ok((db, path))
}

pub(crate) async fn teardown(db: DatabaseConnection, path: PathBuf) {
    let _ = db.close().await;
    let _ = std::fs::remove_file(&path);
}
