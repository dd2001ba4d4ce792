pub mod riders;
pub mod motorcycles;

use axum::{
    http::{
        header::{ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN},
        HeaderName, HeaderValue, Method,
    },
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";
pub const ALLOW_METHODS: &str = "PUT, POST, GET, DELETE, OPTIONS";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Any origin, with the fixed header and method lists. Answers preflight requests.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::PUT, Method::POST, Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers([ORIGIN, HeaderName::from_static("x-requested-with"), CONTENT_TYPE, ACCEPT])
}

/// Build the full application router: rider and motorcycle routes plus health and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let riders = Router::new()
        .route("/riders", get(riders::list).post(riders::create))
        .route("/riders/:id", get(riders::get).put(riders::update).delete(riders::delete))
        .route("/riders/score/:id", put(riders::add_score));

    let motorcycles = Router::new()
        .route("/motorcycles", get(motorcycles::list).post(motorcycles::create))
        .route("/motorcycles/riders/:rider_id", get(motorcycles::by_rider));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(riders)
        .merge(motorcycles)
        .with_state(state)
        .layer(cors)
        // The CORS headers go on every response, not only on cross-origin ones
        .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN)))
        .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS)))
        .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS)))
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
