use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use anyhow::Result;
use uuid::Uuid;

use super::{setup_test_db, teardown};
use crate::{errors::ModelError, motorcycle, rider};

/// Test rider CRUD operations
#[tokio::test]
async fn test_rider_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let (db, path) = setup_test_db().await?;

    // Create
    let created = rider::create(&db, "Valentino", "Rossi", 45).await?;
    assert_eq!(created.first_name, "Valentino");
    assert!(created.score.is_empty());

    // Read
    let found = rider::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.last_name, "Rossi");
    assert_eq!(found.age, 45);

    // Score column round-trips through the JSON column
    let mut am: rider::ActiveModel = found.into();
    let mut score = created.score.clone();
    score.insert(25.0);
    score.insert(12.5);
    am.score = Set(score.clone());
    let updated = am.update(&db).await?;
    assert_eq!(updated.score, score);
    let reread = rider::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(reread.score.values().collect::<Vec<_>>(), vec![25.0, 12.5]);

    // Delete
    rider::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(rider::Entity::find_by_id(created.id).one(&db).await?.is_none());

    teardown(db, path).await;
    Ok(())
}

#[tokio::test]
async fn test_rider_validation() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let (db, path) = setup_test_db().await?;

    assert!(matches!(rider::create(&db, " ", "Rossi", 45).await, Err(ModelError::Validation(_))));
    assert!(matches!(rider::create(&db, "Marc", "Marquez", -1).await, Err(ModelError::Validation(_))));
    assert!(rider::Entity::find().all(&db).await?.is_empty());

    teardown(db, path).await;
    Ok(())
}

/// Motorcycles keep a soft reference: any rider id is accepted
#[tokio::test]
async fn test_motorcycle_crud_without_rider() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let (db, path) = setup_test_db().await?;

    let ghost = Uuid::new_v4();
    let m = motorcycle::create(&db, "Ducati", 1000, 157.5, ghost).await?;
    assert_eq!(m.rider_id, ghost);

    let by_rider = motorcycle::Entity::find()
        .filter(motorcycle::Column::RiderId.eq(ghost))
        .all(&db)
        .await?;
    assert_eq!(by_rider.len(), 1);
    assert_eq!(by_rider[0].id, m.id);
    assert_eq!(by_rider[0].weight, 157.5);

    assert!(matches!(
        motorcycle::create(&db, "Honda", 0, 150.0, ghost).await,
        Err(ModelError::Validation(_))
    ));
    assert!(matches!(
        motorcycle::create(&db, "Honda", 1000, f64::NAN, ghost).await,
        Err(ModelError::Validation(_))
    ));

    teardown(db, path).await;
    Ok(())
}
