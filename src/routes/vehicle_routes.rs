//! Rutas de vehículos
//!
//! Handlers finos: extraen la request, arman el controller y traducen el
//! resultado. Toda la lógica vive en los controllers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::controllers::{CostController, SaleController, VehicleController};
use crate::dto::common::ApiResponse;
use crate::dto::cost_dto::{CostResponse, CostTotalResponse};
use crate::dto::photo_dto::{CreatePhotoRequest, PhotoResponse};
use crate::dto::sale_dto::SaleResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, ListVehiclesQuery, UpdateVehicleRequest, VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", patch(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/photos", post(add_photo))
        .route("/:id/photos", get(list_photos))
        .route("/:id/sales", get(list_sales))
        .route("/:id/costs", get(list_costs))
        .route("/:id/costs/total", get(costs_total))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListVehiclesQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CreatePhotoRequest>,
) -> Result<(StatusCode, Json<PhotoResponse>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.add_photo(id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_photos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<PhotoResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_photos(id).await?;
    Ok(Json(response))
}

async fn list_sales(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SaleResponse>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn list_costs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CostResponse>>, AppError> {
    let controller = CostController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn costs_total(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CostTotalResponse>, AppError> {
    let controller = CostController::new(state.pool.clone());
    let response = controller.total_by_vehicle(id).await?;
    Ok(Json(response))
}
