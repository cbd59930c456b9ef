//! Rutas de costos

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::CostController;
use crate::dto::cost_dto::{CostResponse, CreateCostRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cost_router() -> Router<AppState> {
    Router::new().route("/", post(create_cost))
}

async fn create_cost(
    State(state): State<AppState>,
    Json(request): Json<CreateCostRequest>,
) -> Result<(StatusCode, Json<CostResponse>), AppError> {
    let controller = CostController::new(state.pool.clone());
    let response = controller.add(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
