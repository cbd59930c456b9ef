//! Repositorio de costos
//!
//! Acceso a la tabla `costs`. Un costo puede quedar sin vehículo asignado.

use crate::models::{Cost, CostType};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::SqlitePool;

const COST_COLUMNS: &str = "id, vehicle_id, cost_type, amount, cost_date, note";

pub struct CostRepository {
    pool: SqlitePool,
}

impl CostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(
        &self,
        vehicle_id: Option<i64>,
        cost_type: CostType,
        amount: f64,
        cost_date: NaiveDate,
        note: Option<String>,
    ) -> Result<Cost, AppError> {
        if let Some(id) = vehicle_id {
            let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            if exists == 0 {
                return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
            }
        }

        let cost = sqlx::query_as::<_, Cost>(&format!(
            r#"
            INSERT INTO costs (vehicle_id, cost_type, amount, cost_date, note)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {COST_COLUMNS}
            "#
        ))
        .bind(vehicle_id)
        .bind(cost_type)
        .bind(amount)
        .bind(cost_date)
        .bind(&note)
        .fetch_one(&self.pool)
        .await?;

        Ok(cost)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<Cost>, AppError> {
        let costs = sqlx::query_as::<_, Cost>(&format!(
            "SELECT {COST_COLUMNS} FROM costs WHERE vehicle_id = ? ORDER BY id DESC"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(costs)
    }

    /// Suma de costos del vehículo; 0 si no tiene ninguno.
    pub async fn total_by_vehicle(&self, vehicle_id: i64) -> Result<f64, AppError> {
        let total: f64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM costs WHERE vehicle_id = ?")
                .bind(vehicle_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }
}
