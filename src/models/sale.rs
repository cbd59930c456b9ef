//! Modelo de Sale
//!
//! Una venta pertenece a exactamente un vehículo. `amount_paid` es un valor
//! derivado: la suma de los pagos de la venta, recalculada en la misma
//! transacción que cada alta/baja de pago. `status` es función pura de ese
//! total contra `sale_price`, nunca un flag seteado de forma independiente.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de la venta: OPEN hasta que los pagos alcanzan el precio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Open,
    Paid,
}

/// Sale principal - mapea exactamente a la tabla sales
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
    pub vehicle_id: i64,
    pub sale_date: NaiveDate,
    pub sale_price: f64,
    pub amount_paid: f64,
    pub status: SaleStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
