use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::{
    motorcycles::CreateMotorcycleInput,
    riders::{AddScoreInput, CreateRiderInput, UpdateRiderInput},
};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RiderDoc {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// Distinct score values, in the order they were first added
    pub score: Vec<f64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct RiderListDoc { pub riders: Vec<RiderDoc> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MotorcycleDoc {
    pub id: Uuid,
    pub manufacturer: String,
    pub displacement: i32,
    pub weight: f64,
    /// Not checked against existing riders
    pub rider_id: Uuid,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct MotorcycleListDoc { pub motorcycles: Vec<MotorcycleDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::riders::create,
        crate::routes::riders::list,
        crate::routes::riders::get,
        crate::routes::riders::update,
        crate::routes::riders::add_score,
        crate::routes::riders::delete,
        crate::routes::motorcycles::create,
        crate::routes::motorcycles::list,
        crate::routes::motorcycles::by_rider,
    ),
    components(
        schemas(
            HealthResponse,
            RiderDoc,
            RiderListDoc,
            MotorcycleDoc,
            MotorcycleListDoc,
            CreateRiderInput,
            UpdateRiderInput,
            AddScoreInput,
            CreateMotorcycleInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "riders"),
        (name = "motorcycles")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/riders", "/riders/{id}", "/riders/score/{id}", "/motorcycles", "/motorcycles/riders/{riderId}", "/health"] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
