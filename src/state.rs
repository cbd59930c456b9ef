//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El pool se abre en el bootstrap del proceso
//! y se inyecta acá; ningún módulo mantiene singletons propios.

use crate::config::EnvironmentConfig;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
