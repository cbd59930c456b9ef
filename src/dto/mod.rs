//! DTOs de la API
//!
//! Requests con validación derive y responses serializables por recurso.

pub mod common;
pub mod cost_dto;
pub mod payment_dto;
pub mod photo_dto;
pub mod sale_dto;
pub mod vehicle_dto;

pub use common::ApiResponse;
