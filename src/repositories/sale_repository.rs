//! Repositorio de ventas
//!
//! Abre y consulta ventas, y es dueño del recálculo de liquidación:
//! `amount_paid` es siempre la suma de los pagos y `status` es función pura
//! de ese total contra `sale_price`. El recálculo corre dentro de la
//! transacción del llamador para que un crash entre "insertar pago" y
//! "actualizar amount_paid" no deje el ledger inconsistente.

use crate::models::{Sale, VehicleStatus};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};

const SALE_COLUMNS: &str =
    "id, vehicle_id, sale_date, sale_price, amount_paid, status, notes, created_at";

pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Abrir una venta sobre un vehículo existente. El alta de la venta y el
    /// pase del vehículo a SOLD comparten una transacción.
    pub async fn open(
        &self,
        vehicle_id: i64,
        sale_date: NaiveDate,
        sale_price: f64,
        notes: Option<String>,
    ) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE id = ?")
            .bind(vehicle_id)
            .fetch_one(&mut *tx)
            .await?;
        if exists == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        let sale = sqlx::query_as::<_, Sale>(&format!(
            r#"
            INSERT INTO sales (vehicle_id, sale_date, sale_price, amount_paid, status, notes, created_at)
            VALUES (?, ?, ?, 0, 'OPEN', ?, ?)
            RETURNING {SALE_COLUMNS}
            "#
        ))
        .bind(vehicle_id)
        .bind(sale_date)
        .bind(sale_price)
        .bind(&notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET status = ? WHERE id = ?")
            .bind(VehicleStatus::Sold)
            .bind(vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sale)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sale>, AppError> {
        let sale =
            sqlx::query_as::<_, Sale>(&format!("SELECT {SALE_COLUMNS} FROM sales WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(sale)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<Sale>, AppError> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE vehicle_id = ? ORDER BY id DESC"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Recalcular estado según el total de pagos; idempotente.
    pub async fn close_if_settled(&self, sale_id: i64) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;
        let sale = recompute_settlement(&mut tx, sale_id).await?;
        tx.commit().await?;
        Ok(sale)
    }
}

/// Recalcular `amount_paid` y `status` de una venta a partir de sus pagos,
/// dentro de la transacción del llamador. Un solo UPDATE: la suma, el total
/// y la transición OPEN/PAID son atómicos.
pub async fn recompute_settlement(
    conn: &mut SqliteConnection,
    sale_id: i64,
) -> Result<Sale, AppError> {
    let sale = sqlx::query_as::<_, Sale>(&format!(
        r#"
        UPDATE sales
        SET amount_paid = (SELECT COALESCE(SUM(amount), 0.0) FROM payments WHERE sale_id = sales.id),
            status = CASE
                WHEN (SELECT COALESCE(SUM(amount), 0.0) FROM payments WHERE sale_id = sales.id)
                     >= sale_price
                THEN 'PAID'
                ELSE 'OPEN'
            END
        WHERE id = ?
        RETURNING {SALE_COLUMNS}
        "#
    ))
    .bind(sale_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

    Ok(sale)
}
