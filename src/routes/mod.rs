//! Rutas de la API
//!
//! Arma el router completo de la aplicación sobre el estado compartido.

pub mod cost_routes;
pub mod payment_routes;
pub mod sale_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/sales", sale_routes::create_sale_router())
        .nest("/api/payments", payment_routes::create_payment_router())
        .nest("/api/costs", cost_routes::create_cost_router())
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "autogo-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
