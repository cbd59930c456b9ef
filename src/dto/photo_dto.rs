//! DTOs de Photo

use crate::models::Photo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar metadatos de una foto
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePhotoRequest {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
}

/// Response de foto para la API
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            vehicle_id: photo.vehicle_id,
            filename: photo.filename,
            created_at: photo.created_at,
        }
    }
}
