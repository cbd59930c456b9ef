//! Modelo de Payment
//!
//! Un pago pertenece a exactamente una venta y siempre tiene monto positivo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payment principal - mapea exactamente a la tabla payments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub sale_id: i64,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
    pub method: Option<String>,
    pub reference: Option<String>,
}
