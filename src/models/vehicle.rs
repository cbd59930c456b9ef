//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums persistidos.
//! Mapea exactamente al schema SQLite con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado del vehículo en inventario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Sold,
}

/// Cómo entró el vehículo al inventario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcquisitionType {
    TradeIn,
    DirectSale,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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

/// Datos ya normalizados y validados para insertar un vehículo nuevo
#[derive(Debug, Clone)]
pub struct NewVehicle {
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
}
