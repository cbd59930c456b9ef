//! Repositorio de vehículos
//!
//! Acceso a la tabla `vehicles`. La unicidad de VIN/matrícula tiene doble
//! guardia: el pre-chequeo `vin_exists`/`plate_exists` produce el error
//! amigable en el camino común, y el índice UNIQUE de la base rechaza al
//! perdedor de una carrera; esa violación se re-reporta como Conflict.

use crate::models::{NewVehicle, Vehicle, VehicleStatus};
use crate::utils::errors::{map_unique_violation, AppError};
use chrono::Utc;
use sqlx::SqlitePool;

const VEHICLE_COLUMNS: &str = "id, vin, plate, brand, model, year, odometer_km, \
     acquisition_type, seller_name, seller_contact, seller_document, received_date, \
     status, created_at";

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles
                (vin, plate, brand, model, year, odometer_km, acquisition_type,
                 seller_name, seller_contact, seller_document, received_date, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {VEHICLE_COLUMNS}
            "#
        ))
        .bind(&vehicle.vin)
        .bind(&vehicle.plate)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.odometer_km)
        .bind(vehicle.acquisition_type)
        .bind(&vehicle.seller_name)
        .bind(&vehicle.seller_contact)
        .bind(&vehicle.seller_document)
        .bind(vehicle.received_date)
        .bind(VehicleStatus::Available)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El VIN o la matrícula ya existen en el sistema"))?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Listado paginado, más recientes primero (id descendente).
    pub async fn list(
        &self,
        query: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = match query {
            Some(q) => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, Vehicle>(&format!(
                    r#"
                    SELECT {VEHICLE_COLUMNS} FROM vehicles
                    WHERE brand LIKE ? OR vin LIKE ?
                    ORDER BY id DESC
                    LIMIT ? OFFSET ?
                    "#
                ))
                .bind(&pattern)
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>(&format!(
                    "SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY id DESC LIMIT ? OFFSET ?"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(vehicles)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// ¿Existe otro vehículo (distinto de `exclude_id`) con este VIN normalizado?
    pub async fn vin_exists(&self, vin: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let count: i64 = match exclude_id {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE vin = ? AND id <> ?")
                    .bind(vin)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE vin = ?")
                .bind(vin)
                .fetch_one(&self.pool)
                .await?,
        };

        Ok(count > 0)
    }

    /// ¿Existe otro vehículo (distinto de `exclude_id`) con esta matrícula?
    pub async fn plate_exists(
        &self,
        plate: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let count: i64 = match exclude_id {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE plate = ? AND id <> ?")
                    .bind(plate)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE plate = ?")
                .bind(plate)
                .fetch_one(&self.pool)
                .await?,
        };

        Ok(count > 0)
    }

    /// Actualización parcial: los campos None conservan el valor actual.
    /// `plate` ya viene normalizada; Some(None) limpia la matrícula.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        vin: Option<String>,
        plate: Option<Option<String>>,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        odometer_km: Option<i64>,
        seller_name: Option<String>,
        seller_contact: Option<String>,
        seller_document: Option<String>,
        received_date: Option<chrono::NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET vin = ?, plate = ?, brand = ?, model = ?, year = ?, odometer_km = ?,
                seller_name = ?, seller_contact = ?, seller_document = ?, received_date = ?
            WHERE id = ?
            RETURNING {VEHICLE_COLUMNS}
            "#
        ))
        .bind(vin.unwrap_or(current.vin))
        .bind(plate.unwrap_or(current.plate))
        .bind(brand.unwrap_or(current.brand))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(odometer_km.unwrap_or(current.odometer_km))
        .bind(seller_name.unwrap_or(current.seller_name))
        .bind(seller_contact.or(current.seller_contact))
        .bind(seller_document.or(current.seller_document))
        .bind(received_date.or(current.received_date))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El VIN o la matrícula ya existen en el sistema"))?;

        Ok(vehicle)
    }

    /// Borrar el vehículo; las FKs en cascada eliminan fotos, ventas
    /// (con sus pagos) y costos asignados.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
