//! HTTP API - axum routes over the core business logic.
//!
//! All routes live under `/api`. Handlers are thin: they extract input, call
//! into [`crate::core`], and let [`crate::errors::Error`] render failures.

pub mod applications;
pub mod benefit_plans;
pub mod business_owners;
pub mod employees;
pub mod extract;
pub mod fica;
pub mod health;
pub mod server;
pub mod summary;

use crate::config::ServerConfig;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Shared state available to every handler.
/// Holds the store connection opened at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all store operations
    pub db: DatabaseConnection,
}

impl AppState {
    /// Wraps an open connection for use by the router.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the `/api` routes without middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/business-owners",
            post(business_owners::create_business_owner)
                .get(business_owners::list_business_owners),
        )
        .route(
            "/business-owners/{owner_id}",
            get(business_owners::get_business_owner),
        )
        .route("/employees", post(employees::create_employee))
        .route(
            "/employees/business/{owner_id}",
            get(employees::list_employees_for_business),
        )
        .route(
            "/employees/{employee_id}",
            get(employees::get_employee).delete(employees::delete_employee),
        )
        .route(
            "/benefit-plans",
            post(benefit_plans::create_benefit_plan).get(benefit_plans::list_benefit_plans),
        )
        .route(
            "/benefit-plans/{plan_type}",
            get(benefit_plans::list_benefit_plans_by_type),
        )
        .route("/fica-calculation/{owner_id}", post(fica::calculate))
        .route("/fica-calculation/history/{owner_id}", get(fica::history))
        .route("/applications", post(applications::create_application))
        .route(
            "/applications/business/{owner_id}",
            get(applications::list_applications_for_business),
        )
        .route(
            "/applications/{application_id}",
            get(applications::get_application).put(applications::update_application),
        )
        .route(
            "/eligibility-check/{owner_id}",
            get(summary::eligibility_check),
        )
        .route("/dashboard/{owner_id}", get(summary::dashboard_summary))
}

/// Builds the CORS policy from the configured origin allow-list.
///
/// Credentials are allowed, so a `*` entry is served by echoing the request
/// origin instead of the literal wildcard.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .inspect_err(|e| warn!("Ignoring invalid CORS origin '{}': {}", origin, e))
                    .ok()
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the complete application router
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins))
        .with_state(state)
}
