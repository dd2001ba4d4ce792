use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use models::motorcycle::{self, Model as Motorcycle};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::JsonApiError, extract::JsonOrForm, state::AppState};

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMotorcycleInput {
    pub manufacturer: String,
    pub displacement: i32,
    pub weight: f64,
    pub rider_id: Uuid,
}

impl CreateMotorcycleInput {
    fn validate(&self) -> Result<(), JsonApiError> {
        motorcycle::validate_manufacturer(&self.manufacturer)?;
        motorcycle::validate_displacement(self.displacement)?;
        motorcycle::validate_weight(self.weight)?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MotorcycleList {
    pub motorcycles: Vec<Motorcycle>,
}

#[utoipa::path(
    post, path = "/motorcycles", tag = "motorcycles",
    request_body = CreateMotorcycleInput,
    responses(
        (status = 200, description = "Created motorcycle; riderId is not checked against riders", body = crate::openapi::MotorcycleDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<CreateMotorcycleInput>,
) -> Result<Json<Motorcycle>, JsonApiError> {
    input.validate()?;
    let created = state
        .motorcycles
        .create(&input.manufacturer, input.displacement, input.weight, input.rider_id)
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/motorcycles", tag = "motorcycles",
    responses(
        (status = 200, description = "All motorcycles", body = crate::openapi::MotorcycleListDoc),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<MotorcycleList>, JsonApiError> {
    let motorcycles = state.motorcycles.list().await?;
    Ok(Json(MotorcycleList { motorcycles }))
}

#[utoipa::path(
    get, path = "/motorcycles/riders/{riderId}", tag = "motorcycles",
    params(("riderId" = Uuid, Path, description = "Owning rider ID")),
    responses(
        (status = 200, description = "Motorcycles owned by the rider", body = [crate::openapi::MotorcycleDoc]),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn by_rider(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Motorcycle>>, JsonApiError> {
    let Path(rider_id) = path?;
    Ok(Json(state.motorcycles.find_by_rider(rider_id).await?))
}
