use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;
use chrono::Utc;
use models::rider::{self, Entity as RiderEntity};
use sea_orm::prelude::DateTimeWithTimeZone;
use crate::errors::ServiceError;

/// Create a rider with an empty score set.
pub async fn create_rider(db: &DatabaseConnection, first_name: &str, last_name: &str, age: i32) -> Result<rider::Model, ServiceError> {
    let created = rider::create(db, first_name, last_name, age).await?;
    Ok(created)
}

/// All riders, oldest first.
pub async fn list_riders(db: &DatabaseConnection) -> Result<Vec<rider::Model>, ServiceError> {
    let rows = RiderEntity::find()
        .order_by_asc(rider::Column::CreatedAt)
        .order_by_asc(rider::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a rider by id.
pub async fn get_rider(db: &DatabaseConnection, id: Uuid) -> Result<Option<rider::Model>, ServiceError> {
    let found = RiderEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Replace first and/or last name. Age and score are never touched.
pub async fn update_rider_names(
    db: &DatabaseConnection,
    id: Uuid,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Option<rider::Model>, ServiceError> {
    if let Some(f) = first_name { rider::validate_name("firstName", f)?; }
    if let Some(l) = last_name { rider::validate_name("lastName", l)?; }

    let Some(existing) = RiderEntity::find_by_id(id).one(db).await? else { return Ok(None); };
    if first_name.is_none() && last_name.is_none() {
        return Ok(Some(existing));
    }
    let mut am: rider::ActiveModel = existing.into();
    if let Some(f) = first_name { am.first_name = Set(f.to_string()); }
    if let Some(l) = last_name { am.last_name = Set(l.to_string()); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await?;
    Ok(Some(updated))
}

/// Add `score` to the rider's score set. A value already present leaves the
/// rider unchanged. On Postgres the read and the write share one transaction
/// with the row locked; on SQLite the set-add is a single conditional UPDATE.
pub async fn add_rider_score(db: &DatabaseConnection, id: Uuid, score: f64) -> Result<Option<rider::Model>, ServiceError> {
    rider::validate_score(score)?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        return add_rider_score_sqlite(db, id, score).await;
    }

    let txn = db.begin().await?;
    let mut query = RiderEntity::find_by_id(id);
    if txn.get_database_backend() == DatabaseBackend::Postgres {
        query = query.lock_exclusive();
    }
    let Some(existing) = query.one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };

    let mut scores = existing.score.clone();
    if !scores.insert(score) {
        txn.commit().await?;
        return Ok(Some(existing));
    }

    let mut am: rider::ActiveModel = existing.into();
    am.score = Set(scores);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(Some(updated))
}

// A deferred SQLite transaction cannot upgrade its read lock while another
// writer holds the database, so the append happens in one statement that
// waits on the busy timeout instead.
async fn add_rider_score_sqlite(db: &DatabaseConnection, id: Uuid, score: f64) -> Result<Option<rider::Model>, ServiceError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    RiderEntity::update_many()
        .col_expr(rider::Column::Score, Expr::cust_with_values("json_insert(\"score\", ?, ?)", ["$[#]".into(), sea_orm::Value::from(score)]))
        .col_expr(rider::Column::UpdatedAt, Expr::value(now))
        .filter(rider::Column::Id.eq(id))
        .filter(Expr::cust_with_values(
            "NOT EXISTS (SELECT 1 FROM json_each(\"rider\".\"score\") WHERE json_each.value = ?)",
            [score],
        ))
        .exec(db)
        .await?;
    let found = RiderEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Delete a rider and return it as it was. Motorcycles referencing the rider stay.
pub async fn delete_rider(db: &DatabaseConnection, id: Uuid) -> Result<Option<rider::Model>, ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = RiderEntity::find_by_id(id).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };
    RiderEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(Some(existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn rider_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let r = create_rider(db, "Valentino", "Rossi", 45).await?;
        assert!(r.score.is_empty());

        let found = get_rider(db, r.id).await?.unwrap();
        assert_eq!(found.first_name, "Valentino");

        let all = list_riders(db).await?;
        assert_eq!(all.len(), 1);

        let deleted = delete_rider(db, r.id).await?.unwrap();
        assert_eq!(deleted.id, r.id);
        assert_eq!(deleted.last_name, "Rossi");
        assert!(get_rider(db, r.id).await?.is_none());
        assert!(list_riders(db).await?.is_empty());

        t.cleanup().await;
        Ok(())
    }

    #[tokio::test]
    async fn update_names_leaves_age_and_score() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let r = create_rider(db, "Jorge", "Lorenzo", 37).await?;
        add_rider_score(db, r.id, 25.0).await?;

        let only_last = update_rider_names(db, r.id, None, Some("Lorenzo Guerrero")).await?.unwrap();
        assert_eq!(only_last.first_name, "Jorge");
        assert_eq!(only_last.last_name, "Lorenzo Guerrero");
        assert_eq!(only_last.age, 37);
        assert_eq!(only_last.score.values().collect::<Vec<_>>(), vec![25.0]);

        let both = update_rider_names(db, r.id, Some("J."), Some("Lorenzo")).await?.unwrap();
        assert_eq!((both.first_name.as_str(), both.last_name.as_str()), ("J.", "Lorenzo"));

        let unchanged = update_rider_names(db, r.id, None, None).await?.unwrap();
        assert_eq!(unchanged.first_name, "J.");

        let err = update_rider_names(db, r.id, Some("  "), None).await;
        assert!(matches!(err, Err(ServiceError::Validation(_))));

        assert!(update_rider_names(db, Uuid::new_v4(), Some("X"), None).await?.is_none());

        t.cleanup().await;
        Ok(())
    }

    #[tokio::test]
    async fn add_score_is_set_semantics() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let t = get_db().await?;
        let db = &t.db;

        let r = create_rider(db, "Marc", "Marquez", 31).await?;
        let once = add_rider_score(db, r.id, 25.0).await?.unwrap();
        assert_eq!(once.score.values().collect::<Vec<_>>(), vec![25.0]);

        let twice = add_rider_score(db, r.id, 25.0).await?.unwrap();
        assert_eq!(twice.score.len(), 1);

        let third = add_rider_score(db, r.id, 20.0).await?.unwrap();
        assert_eq!(third.score.values().collect::<Vec<_>>(), vec![25.0, 20.0]);
        assert_eq!(third.first_name, "Marc");
        assert_eq!(third.age, 31);

        assert!(add_rider_score(db, Uuid::new_v4(), 10.0).await?.is_none());
        assert!(matches!(add_rider_score(db, r.id, f64::INFINITY).await, Err(ServiceError::Validation(_))));

        t.cleanup().await;
        Ok(())
    }
}
