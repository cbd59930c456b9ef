//! Módulo de base de datos
//!
//! Conexión, esquema base, evolución aditiva de esquema y datos de demo.

pub mod connection;
pub mod evolution;
pub mod schema;
pub mod seed;

pub use connection::DatabaseConnection;
