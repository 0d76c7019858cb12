use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::config::Config;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    api_routes().fallback_service(ServeDir::new(&config.server.static_dir))
}

fn api_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D402 SUPPLY CHAIN DASHBOARD
        // ========================================
        .route(
            "/api/d402/regions",
            get(handlers::d402_supply_chain::get_regions),
        )
        .route(
            "/api/d402/dashboard",
            get(handlers::d402_supply_chain::get_dashboard),
        )
        .route(
            "/api/d402/export",
            get(handlers::d402_supply_chain::export_csv),
        )
        .route(
            "/api/d402/cache/invalidate",
            post(handlers::d402_supply_chain::invalidate_cache),
        )
}
