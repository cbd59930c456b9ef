//! AutoGo backend - inventario de concesionaria
//!
//! Vehículos que entran por trade-in o compra directa, se venden y se pagan
//! en cuotas; los costos incidentales se registran por vehículo. El núcleo
//! es el ledger transaccional (unicidad VIN/matrícula, ciclo OPEN -> PAID,
//! acumulación de pagos) más la guardia de evolución aditiva de esquema.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
