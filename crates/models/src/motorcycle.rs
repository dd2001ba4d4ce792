use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "motorcycle")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub manufacturer: String,
    pub displacement: i32,
    #[serde(serialize_with = "crate::numeric::serialize_compact")]
    pub weight: f64,
    /// Owning rider. Never checked against the `rider` table.
    pub rider_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_manufacturer(m: &str) -> Result<(), errors::ModelError> {
    if m.trim().is_empty() {
        return Err(errors::ModelError::Validation("manufacturer required".into()));
    }
    if m.chars().count() > 128 {
        return Err(errors::ModelError::Validation("manufacturer longer than 128 characters".into()));
    }
    Ok(())
}

pub fn validate_displacement(cc: i32) -> Result<(), errors::ModelError> {
    if cc <= 0 {
        return Err(errors::ModelError::Validation("displacement must be positive".into()));
    }
    Ok(())
}

pub fn validate_weight(kg: f64) -> Result<(), errors::ModelError> {
    if !kg.is_finite() || kg <= 0.0 {
        return Err(errors::ModelError::Validation("weight must be a positive number".into()));
    }
    Ok(())
}

/// Insert a motorcycle for `rider_id`, whether or not that rider exists.
pub async fn create(
    db: &DatabaseConnection,
    manufacturer: &str,
    displacement: i32,
    weight: f64,
    rider_id: Uuid,
) -> Result<Model, errors::ModelError> {
    validate_manufacturer(manufacturer)?;
    validate_displacement(displacement)?;
    validate_weight(weight)?;

    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        manufacturer: Set(manufacturer.to_string()),
        displacement: Set(displacement),
        weight: Set(weight),
        rider_id: Set(rider_id),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
