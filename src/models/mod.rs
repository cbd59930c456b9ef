//! Modelos de datos del inventario
//!
//! Structs persistidos y sus enums cerrados. Los valores desconocidos se
//! rechazan al decodificar desde storage.

pub mod cost;
pub mod payment;
pub mod photo;
pub mod sale;
pub mod vehicle;

pub use cost::{Cost, CostType};
pub use payment::Payment;
pub use photo::Photo;
pub use sale::{Sale, SaleStatus};
pub use vehicle::{AcquisitionType, NewVehicle, Vehicle, VehicleStatus};
