//! DTOs de Cost

use crate::models::{Cost, CostType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar un costo, con vehículo opcional
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCostRequest {
    pub vehicle_id: Option<i64>,
    pub cost_type: CostType,
    pub amount: f64,
    pub cost_date: Option<NaiveDate>,

    #[validate(length(max = 150))]
    pub note: Option<String>,
}

/// Response de costo para la API
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub id: i64,
    pub vehicle_id: Option<i64>,
    pub cost_type: CostType,
    pub amount: f64,
    pub cost_date: NaiveDate,
    pub note: Option<String>,
}

impl From<Cost> for CostResponse {
    fn from(cost: Cost) -> Self {
        Self {
            id: cost.id,
            vehicle_id: cost.vehicle_id,
            cost_type: cost.cost_type,
            amount: cost.amount,
            cost_date: cost.cost_date,
            note: cost.note,
        }
    }
}

/// Total acumulado de costos de un vehículo
#[derive(Debug, Serialize)]
pub struct CostTotalResponse {
    pub vehicle_id: i64,
    pub total: f64,
}
