//! Modelo de Cost
//!
//! Costos incidentales (trámites, transporte, reparación) asociados a cero o
//! un vehículo. Un costo sin vehículo queda sin asignar y sobrevive a los
//! cascade-delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Clasificación del costo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Purchase,
    Paperwork,
    Transport,
    Repair,
    Other,
}

/// Cost principal - mapea exactamente a la tabla costs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cost {
    pub id: i64,
    pub vehicle_id: Option<i64>,
    pub cost_type: CostType,
    pub amount: f64,
    pub cost_date: NaiveDate,
    pub note: Option<String>,
}
