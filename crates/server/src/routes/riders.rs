use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use models::rider::{self, Model as Rider};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{errors::JsonApiError, extract::JsonOrForm, state::AppState};

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRiderInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl CreateRiderInput {
    fn validate(&self) -> Result<(), JsonApiError> {
        rider::validate_name("firstName", &self.first_name)?;
        rider::validate_name("lastName", &self.last_name)?;
        rider::validate_age(self.age)?;
        Ok(())
    }
}

/// Either name may be omitted; omitted names keep their current value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRiderInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateRiderInput {
    fn validate(&self) -> Result<(), JsonApiError> {
        if let Some(f) = &self.first_name { rider::validate_name("firstName", f)?; }
        if let Some(l) = &self.last_name { rider::validate_name("lastName", l)?; }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddScoreInput {
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RiderList {
    pub riders: Vec<Rider>,
}

#[utoipa::path(
    post, path = "/riders", tag = "riders",
    request_body = CreateRiderInput,
    responses(
        (status = 200, description = "Created rider with an empty score", body = crate::openapi::RiderDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateRiderInput>,
) -> Result<Json<Rider>, JsonApiError> {
    input.validate()?;
    let created = state.riders.create(&input.first_name, &input.last_name, input.age).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/riders", tag = "riders",
    responses(
        (status = 200, description = "All riders", body = crate::openapi::RiderListDoc),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<RiderList>, JsonApiError> {
    let riders = state.riders.list().await?;
    Ok(Json(RiderList { riders }))
}

#[utoipa::path(
    get, path = "/riders/{id}", tag = "riders",
    params(("id" = Uuid, Path, description = "Rider ID")),
    responses(
        (status = 200, description = "The rider, or null when no rider has this id", body = crate::openapi::RiderDoc),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Option<Rider>>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.riders.get(id).await?))
}

#[utoipa::path(
    put, path = "/riders/{id}", tag = "riders",
    params(("id" = Uuid, Path, description = "Rider ID")),
    request_body = UpdateRiderInput,
    responses(
        (status = 200, description = "Updated rider, or null when no rider has this id", body = crate::openapi::RiderDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    JsonOrForm(input): JsonOrForm<UpdateRiderInput>,
) -> Result<Json<Option<Rider>>, JsonApiError> {
    let Path(id) = path?;
    input.validate()?;
    let updated = state
        .riders
        .update_names(id, input.first_name.as_deref(), input.last_name.as_deref())
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    put, path = "/riders/score/{id}", tag = "riders",
    params(("id" = Uuid, Path, description = "Rider ID")),
    request_body = AddScoreInput,
    responses(
        (status = 200, description = "Rider with the score in its set, or null when no rider has this id", body = crate::openapi::RiderDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn add_score(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    JsonOrForm(input): JsonOrForm<AddScoreInput>,
) -> Result<Json<Option<Rider>>, JsonApiError> {
    let Path(id) = path?;
    rider::validate_score(input.score)?;
    let updated = state.riders.add_score(id, input.score).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/riders/{id}", tag = "riders",
    params(("id" = Uuid, Path, description = "Rider ID")),
    responses(
        (status = 200, description = "The deleted rider, or null when no rider had this id", body = crate::openapi::RiderDoc),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Option<Rider>>, JsonApiError> {
    let Path(id) = path?;
    let deleted = state.riders.delete(id).await?;
    if deleted.is_none() {
        info!(%id, "delete requested for unknown rider");
    }
    Ok(Json(deleted))
}
