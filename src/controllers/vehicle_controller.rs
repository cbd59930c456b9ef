//! Controller de vehículos (registro de inventario)
//!
//! Dueño de la identidad del vehículo: normaliza VIN/matrícula, aplica las
//! reglas de unicidad y delega el SQL al repositorio.

use crate::dto::common::ApiResponse;
use crate::dto::photo_dto::{CreatePhotoRequest, PhotoResponse};
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, ListVehiclesQuery, UpdateVehicleRequest, VehicleResponse,
};
use crate::models::NewVehicle;
use crate::repositories::{PhotoRepository, VehicleRepository};
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::{normalize_plate, normalize_vin, validate_vin};
use sqlx::SqlitePool;
use validator::Validate;

/// Tamaño de página por defecto del listado
const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

pub struct VehicleController {
    repository: VehicleRepository,
    photos: PhotoRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            photos: PhotoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vin = normalize_vin(&request.vin);
        validate_vin(&vin)
            .map_err(|_| AppError::Validation("El VIN debe tener entre 11 y 17 caracteres".to_string()))?;
        let plate = normalize_plate(request.plate.as_deref());

        if self.repository.vin_exists(&vin, None).await? {
            return Err(conflict_error("Vehicle", "vin", &vin));
        }
        if let Some(ref plate) = plate {
            if self.repository.plate_exists(plate, None).await? {
                return Err(conflict_error("Vehicle", "plate", plate));
            }
        }

        let vehicle = self
            .repository
            .create(&NewVehicle {
                vin,
                plate,
                brand: request.brand,
                model: request.model,
                year: request.year,
                odometer_km: request.odometer_km,
                acquisition_type: request.acquisition_type,
                seller_name: request.seller_name,
                seller_contact: request.seller_contact,
                seller_document: request.seller_document,
                received_date: request.received_date,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, query: ListVehiclesQuery) -> Result<Vec<VehicleResponse>, AppError> {
        let page = query.page.unwrap_or(1).max(1);
        let page_size = query
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * page_size;

        let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
        let vehicles = self.repository.list(q, page_size, offset).await?;

        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        // VIN nuevo: normalizar y re-validar unicidad contra los demás registros
        let vin = match request.vin {
            Some(raw) => {
                let vin = normalize_vin(&raw);
                validate_vin(&vin).map_err(|_| {
                    AppError::Validation("El VIN debe tener entre 11 y 17 caracteres".to_string())
                })?;
                if self.repository.vin_exists(&vin, Some(id)).await? {
                    return Err(conflict_error("Vehicle", "vin", &vin));
                }
                Some(vin)
            }
            None => None,
        };

        // Matrícula nueva: vacía significa "limpiar"; no vacía exige unicidad
        let plate = match request.plate {
            Some(raw) => {
                let plate = normalize_plate(Some(&raw));
                if let Some(ref plate) = plate {
                    if self.repository.plate_exists(plate, Some(id)).await? {
                        return Err(conflict_error("Vehicle", "plate", plate));
                    }
                }
                Some(plate)
            }
            None => None,
        };

        let vehicle = self
            .repository
            .update(
                id,
                vin,
                plate,
                request.brand,
                request.model,
                request.year,
                request.odometer_km,
                request.seller_name,
                request.seller_contact,
                request.seller_document,
                request.received_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    pub async fn add_photo(
        &self,
        vehicle_id: i64,
        request: CreatePhotoRequest,
    ) -> Result<PhotoResponse, AppError> {
        request.validate()?;
        let photo = self.photos.add(vehicle_id, request.filename).await?;
        Ok(photo.into())
    }

    pub async fn list_photos(&self, vehicle_id: i64) -> Result<Vec<PhotoResponse>, AppError> {
        let photos = self.photos.list_by_vehicle(vehicle_id).await?;
        Ok(photos.into_iter().map(Into::into).collect())
    }
}
