//! Guardia de evolución de esquema
//!
//! Reconcilia aditivamente la estructura persistida con la forma esperada de
//! las entidades: solo agrega columnas e índices, nunca renombra ni elimina.
//! Corre una única vez en el arranque, después de `schema::create_base_tables`
//! y antes de que cualquier otro componente toque la base.
//!
//! Cada paso es idempotente por sí mismo: si la columna ya existe en el
//! catálogo vivo, el paso es un no-op. Un paso que falla se loggea y se
//! saltea; los pasos restantes corren igual (las migraciones aditivas son de
//! bajo riesgo y acá se prefiere disponibilidad sobre atomicidad estricta).

use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

/// Un paso aditivo de evolución: columna nueva y, opcionalmente, su índice.
struct EvolutionStep {
    table: &'static str,
    column: &'static str,
    add_column: &'static str,
    add_index: Option<&'static str>,
}

/// Lista versionada y ordenada de pasos aditivos. Solo se agrega al final.
const STEPS: &[EvolutionStep] = &[
    EvolutionStep {
        table: "vehicles",
        column: "plate",
        add_column: "ALTER TABLE vehicles ADD COLUMN plate TEXT",
        // Índice único parcial: matrícula en blanco queda exenta de unicidad
        add_index: Some(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_vehicles_plate \
             ON vehicles(plate) WHERE plate IS NOT NULL",
        ),
    },
    EvolutionStep {
        table: "vehicles",
        column: "seller_document",
        add_column: "ALTER TABLE vehicles ADD COLUMN seller_document TEXT",
        add_index: None,
    },
    EvolutionStep {
        table: "vehicles",
        column: "received_date",
        add_column: "ALTER TABLE vehicles ADD COLUMN received_date TEXT",
        add_index: Some(
            "CREATE INDEX IF NOT EXISTS idx_vehicles_received_date \
             ON vehicles(received_date)",
        ),
    },
    EvolutionStep {
        table: "sales",
        column: "notes",
        add_column: "ALTER TABLE sales ADD COLUMN notes TEXT",
        add_index: None,
    },
];

/// Reconciliar el esquema vivo con la forma esperada.
///
/// Devuelve la cantidad de columnas efectivamente agregadas; correrlo dos
/// veces seguidas deja el mismo esquema final que correrlo una vez (la
/// segunda pasada devuelve 0).
pub async fn reconcile(pool: &SqlitePool) -> usize {
    let mut applied = 0;

    for step in STEPS {
        let live_columns = match table_columns(pool, step.table).await {
            Ok(columns) => columns,
            Err(e) => {
                warn!(
                    "⚠️ No se pudo inspeccionar la tabla '{}', paso '{}' salteado: {}",
                    step.table, step.column, e
                );
                continue;
            }
        };

        if !live_columns.iter().any(|c| c == step.column) {
            match sqlx::query(step.add_column).execute(pool).await {
                Ok(_) => {
                    info!("🧱 Columna agregada: {}.{}", step.table, step.column);
                    applied += 1;
                }
                Err(e) => {
                    warn!(
                        "⚠️ Fallo agregando columna {}.{}: {}",
                        step.table, step.column, e
                    );
                    continue;
                }
            }
        }

        // El índice corre siempre: IF NOT EXISTS lo vuelve idempotente y
        // cubre bases donde la columna existía pero el índice no.
        if let Some(add_index) = step.add_index {
            if let Err(e) = sqlx::query(add_index).execute(pool).await {
                warn!(
                    "⚠️ Fallo creando índice para {}.{}: {}",
                    step.table, step.column, e
                );
            }
        }
    }

    applied
}

/// Leer los nombres de columna vivos de una tabla desde el catálogo.
pub async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query(&format!("PRAGMA table_info({})", table))
        .fetch_all(pool)
        .await?;

    rows.iter().map(|row| row.try_get::<String, _>("name")).collect()
}
