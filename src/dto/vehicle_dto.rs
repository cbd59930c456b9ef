//! DTOs de Vehicle
//!
//! Requests y responses de la API de vehículos. La normalización de VIN y
//! matrícula ocurre en el controller; la longitud del VIN se valida recién
//! sobre el valor normalizado (el crudo puede traer espacios).

use crate::models::{AcquisitionType, Vehicle, VehicleStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para registrar un vehículo en inventario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub vin: String,

    pub plate: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub brand: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1980, max = 2026))]
    pub year: i32,

    #[validate(range(min = 0))]
    pub odometer_km: i64,

    pub acquisition_type: AcquisitionType,

    #[validate(length(min = 1, max = 100))]
    pub seller_name: String,

    pub seller_contact: Option<String>,
    pub seller_document: Option<String>,
    pub received_date: Option<NaiveDate>,
}

/// Request para actualización parcial; solo los campos presentes se aplican.
/// `plate` con valor vacío limpia la matrícula.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub vin: Option<String>,
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,

    #[validate(range(min = 1980, max = 2026))]
    pub year: Option<i32>,

    #[validate(range(min = 0))]
    pub odometer_km: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub seller_name: Option<String>,

    pub seller_contact: Option<String>,
    pub seller_document: Option<String>,
    pub received_date: Option<NaiveDate>,
}

/// Filtros de listado: búsqueda por subcadena en marca o VIN y paginación
/// offset-based con página 1-indexada.
#[derive(Debug, Deserialize)]
pub struct ListVehiclesQuery {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub vin: String,
    pub plate: Option<String>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub odometer_km: i64,
    pub acquisition_type: AcquisitionType,
    pub seller_name: String,
    pub seller_contact: Option<String>,
    pub seller_document: Option<String>,
    pub received_date: Option<NaiveDate>,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vin: vehicle.vin,
            plate: vehicle.plate,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            odometer_km: vehicle.odometer_km,
            acquisition_type: vehicle.acquisition_type,
            seller_name: vehicle.seller_name,
            seller_contact: vehicle.seller_contact,
            seller_document: vehicle.seller_document,
            received_date: vehicle.received_date,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
