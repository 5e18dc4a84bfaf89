//! HTTP API Layer
//!
//! This crate provides the REST API for the hostel core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each operational area
//! - **Middleware**: Session authentication, admin gating, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(pool, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{
    admin, dashboard, guests, health, lifecycle, menu, orders, reports, session, staff,
};
use crate::middleware::{audit_middleware, auth_middleware, require_admin};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/login", post(session::login));

    // Admin-only routes: staff management and destructive operations
    let admin_routes = Router::new()
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/staff/:id",
            put(staff::update_password).delete(staff::delete_staff),
        )
        .route("/reset-data", post(admin::reset_data))
        .route_layer(axum_middleware::from_fn(require_admin));

    // Staff routes; the auth middleware lets the guest-facing subset
    // (menu reads, order placement, live bill) through without a session
    let api_routes = Router::new()
        .route("/check-in", post(lifecycle::check_in))
        .route("/check-out", post(lifecycle::check_out))
        .route("/bookings/group", post(lifecycle::group_booking))
        .route("/check-out/group", post(lifecycle::group_check_out))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/guests", get(guests::list_guests))
        .route(
            "/guests/:id",
            put(guests::update_guest).delete(guests::delete_guest),
        )
        .route("/guests/:id/bill", get(guests::get_bill))
        .route("/orders", get(orders::list_orders).post(orders::place_order))
        .route("/orders/:id/status", put(orders::update_order_status))
        .route("/orders/:id", delete(orders::delete_order))
        .route("/menu", get(menu::list_menu).post(menu::create_menu_item))
        .route(
            "/menu/:id",
            get(menu::get_menu_item)
                .put(menu::update_menu_item)
                .delete(menu::delete_menu_item),
        )
        .route("/reports", get(reports::daily_report))
        .route("/reports/export", get(reports::export_checkouts))
        .merge(admin_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
