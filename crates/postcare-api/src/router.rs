use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::routes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let patient = Router::new()
        .route("/checkin/today", get(routes::checkin::today))
        .route("/checkin", post(routes::checkin::submit))
        .route("/checkin/summary", post(routes::checkin::summary))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_patient,
        ));

    let doctor = Router::new()
        .route("/doctor/dashboard", get(routes::doctor::get_dashboard))
        .route("/doctor/patients", get(routes::doctor::list_patients))
        .route(
            "/doctor/patient/{id}/summary",
            get(routes::doctor::get_patient_summary),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_doctor,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .merge(patient)
        .merge(doctor)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
