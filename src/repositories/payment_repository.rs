//! Repositorio de pagos
//!
//! Aplicar y revertir pagos. Cada operación corre en una única transacción
//! junto con el recálculo de liquidación de la venta: insertar/borrar el
//! pago, recomputar `amount_paid` y la transición OPEN/PAID son atómicos.

use crate::models::{Payment, Sale};
use crate::repositories::sale_repository::recompute_settlement;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

const PAYMENT_COLUMNS: &str = "id, sale_id, amount, paid_at, method, reference";
const SALE_COLUMNS: &str =
    "id, vehicle_id, sale_date, sale_price, amount_paid, status, notes, created_at";

pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Aplicar un pago a una venta.
    ///
    /// Un pago que llevaría el total por encima de `sale_price` se rechaza
    /// con Overpayment, sin recortar: recortar en silencio escondería el
    /// error del usuario. El rechazo deja la venta intacta.
    pub async fn apply(
        &self,
        sale_id: i64,
        amount: f64,
        method: Option<String>,
        reference: Option<String>,
        paid_at: DateTime<Utc>,
    ) -> Result<(Payment, Sale), AppError> {
        let mut tx = self.pool.begin().await?;

        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE id = ?"
        ))
        .bind(sale_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

        if sale.amount_paid + amount > sale.sale_price {
            return Err(AppError::Overpayment(format!(
                "El pago de {} excede el saldo pendiente de {}",
                amount,
                sale.sale_price - sale.amount_paid
            )));
        }

        let payment = sqlx::query_as::<_, Payment>(&format!(
            r#"
            INSERT INTO payments (sale_id, amount, paid_at, method, reference)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {PAYMENT_COLUMNS}
            "#
        ))
        .bind(sale_id)
        .bind(amount)
        .bind(paid_at)
        .bind(&method)
        .bind(&reference)
        .fetch_one(&mut *tx)
        .await?;

        let sale = recompute_settlement(&mut tx, sale_id).await?;

        tx.commit().await?;
        Ok((payment, sale))
    }

    /// Revertir (eliminar) un pago y recalcular la venta.
    ///
    /// Si la venta estaba PAID y el total cae por debajo del precio, vuelve a
    /// OPEN. El estado del vehículo NO se revierte: un vehículo vendido sigue
    /// SOLD aunque se revierta un pago de su venta.
    pub async fn reverse(&self, payment_id: i64) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let payment = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = ?"
        ))
        .bind(payment_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Pago no encontrado".to_string()))?;

        sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(payment_id)
            .execute(&mut *tx)
            .await?;

        let sale = recompute_settlement(&mut tx, payment.sale_id).await?;

        tx.commit().await?;
        Ok(sale)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    pub async fn list_by_sale(&self, sale_id: i64) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE sale_id = ? ORDER BY id DESC"
        ))
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }
}
