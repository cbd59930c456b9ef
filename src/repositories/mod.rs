//! Repositorios: acceso a datos por entidad
//!
//! Cada repositorio encapsula el SQL de su tabla. Las reglas de dominio
//! (normalización, validaciones) viven en los controllers.

pub mod cost_repository;
pub mod payment_repository;
pub mod photo_repository;
pub mod sale_repository;
pub mod vehicle_repository;

pub use cost_repository::CostRepository;
pub use payment_repository::PaymentRepository;
pub use photo_repository::PhotoRepository;
pub use sale_repository::SaleRepository;
pub use vehicle_repository::VehicleRepository;
