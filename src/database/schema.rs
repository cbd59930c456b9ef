//! Esquema base de la base de datos
//!
//! Crea las tablas base del inventario. Este paso es precondición dura del
//! arranque: si falla, el proceso no debe continuar. Las columnas agregadas
//! después del primer release NO van acá sino en `evolution.rs`.

use sqlx::SqlitePool;

/// Sentencias de creación de tablas base, en orden de dependencia.
const BASE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vin TEXT NOT NULL UNIQUE,
        brand TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        odometer_km INTEGER NOT NULL DEFAULT 0,
        acquisition_type TEXT NOT NULL,
        seller_name TEXT NOT NULL,
        seller_contact TEXT,
        status TEXT NOT NULL DEFAULT 'AVAILABLE',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        sale_date TEXT NOT NULL,
        sale_price REAL NOT NULL,
        amount_paid REAL NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT 'OPEN',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sale_id INTEGER NOT NULL REFERENCES sales(id) ON DELETE CASCADE,
        amount REAL NOT NULL,
        paid_at TEXT NOT NULL,
        method TEXT,
        reference TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS costs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER REFERENCES vehicles(id) ON DELETE CASCADE,
        cost_type TEXT NOT NULL,
        amount REAL NOT NULL,
        cost_date TEXT NOT NULL,
        note TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS photos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        filename TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_sales_vehicle_id ON sales(vehicle_id)",
    "CREATE INDEX IF NOT EXISTS idx_payments_sale_id ON payments(sale_id)",
    "CREATE INDEX IF NOT EXISTS idx_costs_vehicle_id ON costs(vehicle_id)",
];

/// Crear todas las tablas base. Falla de forma fatal si alguna sentencia falla.
pub async fn create_base_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in BASE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
