use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;
use models::motorcycle::{self, Entity as MotorcycleEntity};
use crate::errors::ServiceError;

/// Create a motorcycle. `rider_id` is stored as given; no rider lookup happens.
pub async fn create_motorcycle(
    db: &DatabaseConnection,
    manufacturer: &str,
    displacement: i32,
    weight: f64,
    rider_id: Uuid,
) -> Result<motorcycle::Model, ServiceError> {
    let created = motorcycle::create(db, manufacturer, displacement, weight, rider_id).await?;
    Ok(created)
}

/// All motorcycles, oldest first.
pub async fn list_motorcycles(db: &DatabaseConnection) -> Result<Vec<motorcycle::Model>, ServiceError> {
    let rows = MotorcycleEntity::find()
        .order_by_asc(motorcycle::Column::CreatedAt)
        .order_by_asc(motorcycle::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Motorcycles whose `rider_id` equals `rider_id`.
pub async fn find_motorcycles_by_rider(db: &DatabaseConnection, rider_id: Uuid) -> Result<Vec<motorcycle::Model>, ServiceError> {
    let rows = MotorcycleEntity::find()
        .filter(motorcycle::Column::RiderId.eq(rider_id))
        .order_by_asc(motorcycle::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::rider_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn motorcycle_service_by_rider() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let rossi = rider_service::create_rider(db, "Valentino", "Rossi", 45).await?;
        let other = Uuid::new_v4();

        let m1 = create_motorcycle(db, "Yamaha", 1000, 203.0, rossi.id).await?;
        let m2 = create_motorcycle(db, "Yamaha", 990, 148.5, rossi.id).await?;
        let m3 = create_motorcycle(db, "Honda", 1000, 160.0, other).await?;

        let mut owned: Vec<Uuid> = find_motorcycles_by_rider(db, rossi.id).await?.into_iter().map(|m| m.id).collect();
        owned.sort();
        let mut expected = vec![m1.id, m2.id];
        expected.sort();
        assert_eq!(owned, expected);

        let all = list_motorcycles(db).await?;
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|m| m.id == m3.id));

        assert!(find_motorcycles_by_rider(db, Uuid::new_v4()).await?.is_empty());

        t.cleanup().await;
        Ok(())
    }

    #[tokio::test]
    async fn deleting_rider_keeps_motorcycles() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let r = rider_service::create_rider(db, "Casey", "Stoner", 39).await?;
        let m = create_motorcycle(db, "Ducati", 800, 150.0, r.id).await?;
        rider_service::delete_rider(db, r.id).await?;

        let still = find_motorcycles_by_rider(db, r.id).await?;
        assert_eq!(still.len(), 1);
        assert_eq!(still[0].id, m.id);

        t.cleanup().await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_motorcycle_rejected() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let res = create_motorcycle(db, "", 1000, 200.0, Uuid::new_v4()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(list_motorcycles(db).await?.is_empty());

        t.cleanup().await;
        Ok(())
    }
}
