//! DTOs de Sale

use crate::models::{Sale, SaleStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para abrir una venta sobre un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct OpenSaleRequest {
    pub vehicle_id: i64,
    pub sale_price: f64,
    pub sale_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Response de venta para la API
#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub sale_date: NaiveDate,
    pub sale_price: f64,
    pub amount_paid: f64,
    pub status: SaleStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            vehicle_id: sale.vehicle_id,
            sale_date: sale.sale_date,
            sale_price: sale.sale_price,
            amount_paid: sale.amount_paid,
            status: sale.status,
            notes: sale.notes,
            created_at: sale.created_at,
        }
    }
}
