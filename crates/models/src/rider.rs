use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::score::ScoreSet;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rider")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    #[sea_orm(column_type = "Json")]
    pub score: ScoreSet,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > 128 {
        return Err(errors::ModelError::Validation(format!("{field} longer than 128 characters")));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), errors::ModelError> {
    if age < 0 {
        return Err(errors::ModelError::Validation("age must not be negative".into()));
    }
    Ok(())
}

pub fn validate_score(score: f64) -> Result<(), errors::ModelError> {
    if !score.is_finite() {
        return Err(errors::ModelError::Validation("score must be a finite number".into()));
    }
    Ok(())
}

/// Insert a new rider. Riders start without any score.
pub async fn create(db: &DatabaseConnection, first_name: &str, last_name: &str, age: i32) -> Result<Model, errors::ModelError> {
    validate_name("firstName", first_name)?;
    validate_name("lastName", last_name)?;
    validate_age(age)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        age: Set(age),
        score: Set(ScoreSet::new()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
