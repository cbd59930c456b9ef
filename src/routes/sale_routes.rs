//! Rutas de ventas y sus pagos

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::{PaymentController, SaleController};
use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{ApplyPaymentRequest, PaymentAppliedResponse, PaymentResponse};
use crate::dto::sale_dto::{OpenSaleRequest, SaleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_sale_router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_sale))
        .route("/:id", get(get_sale))
        .route("/:id/settle", post(settle_sale))
        .route("/:id/payments", post(apply_payment))
        .route("/:id/payments", get(list_payments))
}

async fn open_sale(
    State(state): State<AppState>,
    Json(request): Json<OpenSaleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SaleResponse>>), AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.open(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SaleResponse>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn settle_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SaleResponse>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.close_if_settled(id).await?;
    Ok(Json(response))
}

async fn apply_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ApplyPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentAppliedResponse>), AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.apply(id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_payments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.list_by_sale(id).await?;
    Ok(Json(response))
}
