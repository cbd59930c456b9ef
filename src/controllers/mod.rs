//! Controllers: reglas de dominio por recurso
//!
//! Cada controller valida y normaliza la entrada y delega el SQL a su
//! repositorio.

pub mod cost_controller;
pub mod payment_controller;
pub mod sale_controller;
pub mod vehicle_controller;

pub use cost_controller::CostController;
pub use payment_controller::PaymentController;
pub use sale_controller::SaleController;
pub use vehicle_controller::VehicleController;
