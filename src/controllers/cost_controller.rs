//! Controller de costos (ledger de costos)
//!
//! Costos incidentales no negativos, con vehículo opcional.

use crate::dto::cost_dto::{CostResponse, CostTotalResponse, CreateCostRequest};
use crate::repositories::CostRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

pub struct CostController {
    repository: CostRepository,
}

impl CostController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CostRepository::new(pool),
        }
    }

    pub async fn add(&self, request: CreateCostRequest) -> Result<CostResponse, AppError> {
        request.validate()?;

        if request.amount < 0.0 {
            return Err(AppError::Validation(
                "El monto del costo no puede ser negativo".to_string(),
            ));
        }

        let cost_date = request.cost_date.unwrap_or_else(|| Utc::now().date_naive());
        let cost = self
            .repository
            .add(request.vehicle_id, request.cost_type, request.amount, cost_date, request.note)
            .await?;

        Ok(cost.into())
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<CostResponse>, AppError> {
        let costs = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(costs.into_iter().map(Into::into).collect())
    }

    pub async fn total_by_vehicle(&self, vehicle_id: i64) -> Result<CostTotalResponse, AppError> {
        let total = self.repository.total_by_vehicle(vehicle_id).await?;
        Ok(CostTotalResponse { vehicle_id, total })
    }
}
