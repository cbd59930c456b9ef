//! DTOs de Payment

use crate::dto::sale_dto::SaleResponse;
use crate::models::Payment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para aplicar un pago a una venta
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyPaymentRequest {
    pub amount: f64,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Response de pago para la API
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub sale_id: i64,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
    pub method: Option<String>,
    pub reference: Option<String>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            sale_id: payment.sale_id,
            amount: payment.amount,
            paid_at: payment.paid_at,
            method: payment.method,
            reference: payment.reference,
        }
    }
}

/// Resultado de aplicar un pago: el pago y la venta recalculada
#[derive(Debug, Serialize)]
pub struct PaymentAppliedResponse {
    pub payment: PaymentResponse,
    pub sale: SaleResponse,
}
