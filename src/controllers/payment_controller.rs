//! Controller de pagos (tracker de pagos)
//!
//! Aplica y revierte pagos sobre una venta; el repositorio garantiza que el
//! alta/baja del pago y el recálculo de la venta compartan transacción.

use crate::dto::payment_dto::{ApplyPaymentRequest, PaymentAppliedResponse, PaymentResponse};
use crate::dto::sale_dto::SaleResponse;
use crate::repositories::PaymentRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

pub struct PaymentController {
    repository: PaymentRepository,
}

impl PaymentController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: PaymentRepository::new(pool),
        }
    }

    pub async fn apply(
        &self,
        sale_id: i64,
        request: ApplyPaymentRequest,
    ) -> Result<PaymentAppliedResponse, AppError> {
        request.validate()?;

        if request.amount <= 0.0 {
            return Err(AppError::Validation(
                "El monto del pago debe ser mayor a cero".to_string(),
            ));
        }

        let paid_at = request.paid_at.unwrap_or_else(Utc::now);
        let (payment, sale) = self
            .repository
            .apply(sale_id, request.amount, request.method, request.reference, paid_at)
            .await?;

        Ok(PaymentAppliedResponse {
            payment: payment.into(),
            sale: sale.into(),
        })
    }

    /// Revertir un pago. La venta puede volver de PAID a OPEN; el vehículo
    /// queda SOLD de todas formas.
    pub async fn reverse(&self, payment_id: i64) -> Result<SaleResponse, AppError> {
        let sale = self.repository.reverse(payment_id).await?;
        Ok(sale.into())
    }

    pub async fn list_by_sale(&self, sale_id: i64) -> Result<Vec<PaymentResponse>, AppError> {
        let payments = self.repository.list_by_sale(sale_id).await?;
        Ok(payments.into_iter().map(Into::into).collect())
    }
}
