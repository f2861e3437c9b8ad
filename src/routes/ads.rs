use actix_web::{web, HttpResponse, Responder};
use crate::core::TargetingEngine;
use crate::models::HealthResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: TargetingEngine,
}

impl AppState {
    pub fn new(engine: TargetingEngine) -> Self {
        Self { engine }
    }
}

/// Configure the versioned ad routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/ads/{user_id}", web::get().to(lookup_ad));
}

/// Configure the unversioned serve_ad route
pub fn configure_legacy(cfg: &mut web::ServiceConfig) {
    cfg.route("/serve_ad/{user_id}", web::get().to(serve_ad));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store = state.engine.store();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        users: store.user_count(),
        ads: store.ad_count(),
    })
}

/// Serve ad endpoint
///
/// GET /serve_ad/{user_id}
///
/// Response body:
/// ```json
/// {
///   "user_data": {"age": 25, "interests": ["sports"]},
///   "ad_served": {"category": "string", "message": "string"}
/// }
/// ```
///
/// Unknown users and users with no matching ad still get 200, with the
/// category and message left empty.
async fn serve_ad(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    let response = state.engine.serve_ad(&user_id);

    tracing::info!(
        "Served ad for user {}: category={:?}",
        user_id,
        response.ad_served.category
    );

    HttpResponse::Ok().json(response)
}

/// Ad lookup endpoint
///
/// GET /api/v1/ads/{user_id}
///
/// Same selection as `serve_ad`, but `ad_served` is `null` when nothing
/// matches and `known_user` reports whether the profile was found.
async fn lookup_ad(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    let response = state
        .engine
        .lookup_ad_with(&user_id, &mut rand::thread_rng());

    if !response.known_user {
        tracing::debug!("Unknown user {}, using default profile", user_id);
    }

    tracing::info!(
        "Looked up ad for user {}: matched={}",
        user_id,
        response.ad_served.is_some()
    );

    HttpResponse::Ok().json(response)
}
