//! Repositorio de fotos
//!
//! Metadatos de fotos por vehículo.

use crate::models::Photo;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

const PHOTO_COLUMNS: &str = "id, vehicle_id, filename, created_at";

pub struct PhotoRepository {
    pool: SqlitePool,
}

impl PhotoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, vehicle_id: i64, filename: String) -> Result<Photo, AppError> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE id = ?")
            .bind(vehicle_id)
            .fetch_one(&self.pool)
            .await?;
        if exists == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        let photo = sqlx::query_as::<_, Photo>(&format!(
            r#"
            INSERT INTO photos (vehicle_id, filename, created_at)
            VALUES (?, ?, ?)
            RETURNING {PHOTO_COLUMNS}
            "#
        ))
        .bind(vehicle_id)
        .bind(&filename)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(photo)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<Photo>, AppError> {
        let photos = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photos WHERE vehicle_id = ? ORDER BY id DESC"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }
}
