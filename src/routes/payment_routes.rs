//! Rutas de pagos
//!
//! Solo la reversión vive acá; el alta de pagos cuelga de la venta.

use axum::{
    extract::{Path, State},
    routing::delete,
    Json, Router,
};

use crate::controllers::PaymentController;
use crate::dto::sale_dto::SaleResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new().route("/:id", delete(reverse_payment))
}

async fn reverse_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SaleResponse>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.reverse(id).await?;
    Ok(Json(response))
}
