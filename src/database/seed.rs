//! Datos de demostración
//!
//! Carga dos vehículos de demo únicamente si la tabla está vacía. Es una
//! conveniencia de arranque, no parte del contrato del ledger.

use crate::models::{AcquisitionType, NewVehicle};
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::info;

/// Insertar los vehículos de demo si no hay ninguno cargado.
pub async fn seed_demo_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
    let repository = VehicleRepository::new(pool.clone());

    if repository.count().await? > 0 {
        return Ok(());
    }

    let demo_items = [
        NewVehicle {
            vin: "DEMO1234567890001".to_string(),
            plate: None,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
            odometer_km: 65432,
            acquisition_type: AcquisitionType::DirectSale,
            seller_name: "Demo Seller 1".to_string(),
            seller_contact: Some("+50760000001".to_string()),
            seller_document: Some("CED-8-111-111".to_string()),
            received_date: NaiveDate::from_ymd_opt(2025, 8, 1),
        },
        NewVehicle {
            vin: "DEMO1234567890002".to_string(),
            plate: None,
            brand: "Hyundai".to_string(),
            model: "Elantra".to_string(),
            year: 2019,
            odometer_km: 40210,
            acquisition_type: AcquisitionType::TradeIn,
            seller_name: "Demo Seller 2".to_string(),
            seller_contact: Some("+50760000002".to_string()),
            seller_document: Some("CED-8-222-222".to_string()),
            received_date: NaiveDate::from_ymd_opt(2025, 8, 5),
        },
    ];

    for item in &demo_items {
        repository.create(item).await?;
    }

    info!("🌱 Datos de demo cargados ({} vehículos)", demo_items.len());
    Ok(())
}
