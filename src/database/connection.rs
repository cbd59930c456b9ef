//! Conexión e inicialización de la base de datos
//!
//! El orden de arranque es fijo: crear tablas base (fatal si falla), correr
//! la guardia de evolución de esquema (fallas por paso se loggean) y recién
//! después, opcionalmente, cargar datos de demo.

use crate::config::DatabaseConfig;
use crate::database::{evolution, schema, seed};
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config
            .create_pool()
            .await
            .context("No se pudo conectar a la base de datos")?;

        Ok(Self { pool })
    }

    /// Conectar usando la configuración por defecto (DATABASE_URL / autogo.db).
    pub async fn new_default() -> Result<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inicializar el storage: tablas base, evolución de esquema y demo seed.
    pub async fn initialize(&self, seed_demo: bool) -> Result<()> {
        schema::create_base_tables(&self.pool)
            .await
            .context("Fallo creando las tablas base")?;
        info!("✅ Tablas base verificadas");

        let applied = evolution::reconcile(&self.pool).await;
        info!("✅ Evolución de esquema reconciliada ({} columnas nuevas)", applied);

        if seed_demo {
            seed::seed_demo_if_empty(&self.pool)
                .await
                .context("Fallo cargando datos de demo")?;
        }

        Ok(())
    }
}
