//! Route definitions for the Aqari HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(property_routes())
        .merge(unit_routes())
        .merge(tenant_routes())
        .merge(contract_routes())
        .merge(invoice_routes())
        .merge(maintenance_routes())
        .merge(notification_routes())
        .merge(reminder_routes())
        .merge(settings_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Property CRUD
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list_properties))
        .route("/properties", post(handlers::property::create_property))
        .route("/properties/{id}", get(handlers::property::get_property))
        .route("/properties/{id}", put(handlers::property::update_property))
        .route(
            "/properties/{id}",
            delete(handlers::property::delete_property),
        )
}

/// Unit CRUD
fn unit_routes() -> Router<AppState> {
    Router::new()
        .route("/units", get(handlers::unit::list_units))
        .route("/units", post(handlers::unit::create_unit))
        .route("/units/{id}", get(handlers::unit::get_unit))
        .route("/units/{id}", put(handlers::unit::update_unit))
        .route("/units/{id}", delete(handlers::unit::delete_unit))
}

/// Tenant CRUD
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/tenants", get(handlers::tenant::list_tenants))
        .route("/tenants", post(handlers::tenant::create_tenant))
        .route("/tenants/{id}", get(handlers::tenant::get_tenant))
        .route("/tenants/{id}", put(handlers::tenant::update_tenant))
        .route("/tenants/{id}", delete(handlers::tenant::delete_tenant))
}

/// Lease contract CRUD
fn contract_routes() -> Router<AppState> {
    Router::new()
        .route("/contracts", get(handlers::contract::list_contracts))
        .route("/contracts", post(handlers::contract::create_contract))
        .route("/contracts/{id}", get(handlers::contract::get_contract))
        .route("/contracts/{id}", put(handlers::contract::update_contract))
        .route(
            "/contracts/{id}",
            delete(handlers::contract::delete_contract),
        )
}

/// Invoice CRUD, status transitions, line items
fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(handlers::invoice::list_invoices))
        .route("/invoices", post(handlers::invoice::create_invoice))
        .route("/invoices/{id}", get(handlers::invoice::get_invoice))
        .route("/invoices/{id}", put(handlers::invoice::update_invoice))
        .route("/invoices/{id}", delete(handlers::invoice::delete_invoice))
        .route(
            "/invoices/{id}/status",
            put(handlers::invoice::update_invoice_status),
        )
        .route(
            "/invoices/{id}/items",
            get(handlers::invoice::list_invoice_items),
        )
        .route(
            "/invoices/{id}/items",
            post(handlers::invoice::add_invoice_item),
        )
        .route(
            "/invoices/{id}/items/{item_id}",
            delete(handlers::invoice::delete_invoice_item),
        )
}

/// Maintenance request CRUD
fn maintenance_routes() -> Router<AppState> {
    Router::new()
        .route("/maintenance", get(handlers::maintenance::list_requests))
        .route("/maintenance", post(handlers::maintenance::create_request))
        .route("/maintenance/{id}", get(handlers::maintenance::get_request))
        .route(
            "/maintenance/{id}",
            put(handlers::maintenance::update_request),
        )
        .route(
            "/maintenance/{id}",
            delete(handlers::maintenance::delete_request),
        )
}

/// Notification endpoints, including the alert scan trigger
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route("/notifications/scan", post(handlers::notification::run_scan))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::dismiss),
        )
}

/// WhatsApp reminder endpoints.
///
/// Routes under `/reminders/invoice/` are keyed by invoice id; the
/// status and delete routes act on a reminder log row id.
fn reminder_routes() -> Router<AppState> {
    Router::new()
        .route("/reminders", get(handlers::reminder::list_logs))
        .route("/reminders/upcoming", get(handlers::reminder::upcoming_due))
        .route(
            "/reminders/invoice/{invoice_id}/link",
            get(handlers::reminder::reminder_link),
        )
        .route(
            "/reminders/invoice/{invoice_id}/sent",
            post(handlers::reminder::log_sent),
        )
        .route(
            "/reminders/{id}/status",
            put(handlers::reminder::update_log_status),
        )
        .route("/reminders/{id}", delete(handlers::reminder::delete_log))
}

/// Settings endpoints
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/settings/notifications",
            get(handlers::settings::get_notification_settings),
        )
        .route(
            "/settings/notifications",
            put(handlers::settings::update_notification_settings),
        )
}

/// Dashboard endpoints
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(handlers::dashboard::stats))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sqlx::postgres::PgPoolOptions;

    use aqari_core::config::AppConfig;

    use super::build_router;
    use crate::state::AppState;

    // Route registration panics on conflicting paths or mismatched
    // parameter names, so building the full router is the assertion.
    #[tokio::test]
    async fn all_routes_register_without_conflicts() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": {},
            "database": { "url": "postgres://localhost/aqari" },
            "logging": {}
        }))
        .unwrap();
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/aqari")
            .unwrap();
        let _ = build_router(AppState::new(Arc::new(config), pool));
    }
}
