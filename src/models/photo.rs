//! Modelo de Photo
//!
//! Metadatos de fotos de un vehículo. El archivo en sí vive fuera del core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Photo principal - mapea exactamente a la tabla photos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    pub vehicle_id: i64,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}
