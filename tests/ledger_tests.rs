//! Tests de integración del ledger de inventario
//!
//! Corren contra SQLite en memoria con el mismo arranque que producción:
//! tablas base + guardia de evolución de esquema.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use autogo_backend::controllers::{
    CostController, PaymentController, SaleController, VehicleController,
};
use autogo_backend::database::{evolution, schema, seed};
use autogo_backend::dto::cost_dto::CreateCostRequest;
use autogo_backend::dto::payment_dto::ApplyPaymentRequest;
use autogo_backend::dto::photo_dto::CreatePhotoRequest;
use autogo_backend::dto::sale_dto::OpenSaleRequest;
use autogo_backend::dto::vehicle_dto::{
    CreateVehicleRequest, ListVehiclesQuery, UpdateVehicleRequest,
};
use autogo_backend::models::{AcquisitionType, CostType, SaleStatus, VehicleStatus};
use autogo_backend::utils::errors::AppError;

async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    // Una sola conexión para que todos los accesos vean la misma base en memoria
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    schema::create_base_tables(&pool).await.unwrap();
    evolution::reconcile(&pool).await;
    pool
}

fn vehicle_request(vin: &str, plate: Option<&str>) -> CreateVehicleRequest {
    CreateVehicleRequest {
        vin: vin.to_string(),
        plate: plate.map(str::to_string),
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2018,
        odometer_km: 65432,
        acquisition_type: AcquisitionType::DirectSale,
        seller_name: "Seller".to_string(),
        seller_contact: None,
        seller_document: None,
        received_date: None,
    }
}

fn update_request() -> UpdateVehicleRequest {
    UpdateVehicleRequest::default()
}

#[tokio::test]
async fn create_vehicle_starts_available_and_rejects_duplicate_vin() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    let created = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(created.vin, "1HGCM82633A004352");
    assert_eq!(created.status, VehicleStatus::Available);
    assert_eq!(created.plate, None);

    let err = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn vin_is_normalized_before_comparison_and_storage() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    let created = vehicles
        .create(vehicle_request("  1hgcm82633a004352 ", None))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(created.vin, "1HGCM82633A004352");

    // Misma identidad con otro casing: conflicto
    let err = vehicles
        .create(vehicle_request("1HGCM82633a004352", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn plate_uniqueness_exempts_blank_plates() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    let first = vehicles
        .create(vehicle_request("DEMO1234567890001", Some(" ab-1234 ")))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(first.plate.as_deref(), Some("AB-1234"));

    let err = vehicles
        .create(vehicle_request("DEMO1234567890002", Some("AB-1234")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Matrícula en blanco = "sin matrícula": exenta de unicidad
    vehicles
        .create(vehicle_request("DEMO1234567890003", Some("  ")))
        .await
        .unwrap();
    vehicles
        .create(vehicle_request("DEMO1234567890004", Some("")))
        .await
        .unwrap();
}

#[tokio::test]
async fn short_vin_is_rejected_before_any_write() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    let err = vehicles
        .create(vehicle_request("SHORTVIN", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let listed = vehicles
        .list(ListVehiclesQuery { q: None, page: None, page_size: None })
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn update_revalidates_uniqueness_against_other_records() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    let first = vehicles
        .create(vehicle_request("DEMO1234567890001", Some("AA-1111")))
        .await
        .unwrap()
        .data
        .unwrap();
    let second = vehicles
        .create(vehicle_request("DEMO1234567890002", None))
        .await
        .unwrap()
        .data
        .unwrap();

    // Tomar el VIN del otro registro: conflicto
    let err = vehicles
        .update(
            second.id,
            UpdateVehicleRequest {
                vin: Some("demo1234567890001".to_string()),
                ..update_request()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Re-guardar el propio VIN no conflictúa consigo mismo
    vehicles
        .update(
            first.id,
            UpdateVehicleRequest {
                vin: Some("DEMO1234567890001".to_string()),
                ..update_request()
            },
        )
        .await
        .unwrap();

    // Matrícula vacía limpia el campo
    let cleared = vehicles
        .update(
            first.id,
            UpdateVehicleRequest {
                plate: Some("".to_string()),
                ..update_request()
            },
        )
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cleared.plate, None);

    // Campos no provistos se conservan
    assert_eq!(cleared.brand, "Toyota");

    let err = vehicles.update(9999, update_request()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_filters_by_brand_or_vin_and_paginates_newest_first() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    for i in 1..=5 {
        let mut request = vehicle_request(&format!("DEMO123456789000{}", i), None);
        if i == 3 {
            request.brand = "Hyundai".to_string();
        }
        vehicles.create(request).await.unwrap();
    }

    // Orden: id descendente, más recientes primero
    let page = vehicles
        .list(ListVehiclesQuery { q: None, page: Some(1), page_size: Some(2) })
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page[0].id > page[1].id);
    assert_eq!(page[0].vin, "DEMO1234567890005");

    let second_page = vehicles
        .list(ListVehiclesQuery { q: None, page: Some(2), page_size: Some(2) })
        .await
        .unwrap();
    assert_eq!(second_page.len(), 2);
    assert!(second_page[0].id < page[1].id);

    // Subcadena sobre marca
    let by_brand = vehicles
        .list(ListVehiclesQuery { q: Some("Hyun".to_string()), page: None, page_size: None })
        .await
        .unwrap();
    assert_eq!(by_brand.len(), 1);
    assert_eq!(by_brand[0].brand, "Hyundai");

    // Subcadena sobre VIN
    let by_vin = vehicles
        .list(ListVehiclesQuery { q: Some("90004".to_string()), page: None, page_size: None })
        .await
        .unwrap();
    assert_eq!(by_vin.len(), 1);
    assert_eq!(by_vin[0].vin, "DEMO1234567890004");
}

#[tokio::test]
async fn opening_a_sale_marks_the_vehicle_sold() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();

    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 10000.0,
            sale_date: None,
            notes: Some("venta financiada".to_string()),
        })
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(sale.status, SaleStatus::Open);
    assert_eq!(sale.amount_paid, 0.0);

    let vehicle = vehicles.get_by_id(vehicle.id).await.unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Sold);

    // Precio inválido
    let err = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 0.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Vehículo inexistente
    let err = sales
        .open(OpenSaleRequest {
            vehicle_id: 9999,
            sale_price: 100.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn payments_accumulate_until_settlement_and_overpayment_is_rejected() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());
    let payments = PaymentController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 10000.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap()
        .data
        .unwrap();

    let applied = payments
        .apply(
            sale.id,
            ApplyPaymentRequest {
                amount: 6000.0,
                method: Some("transferencia".to_string()),
                reference: None,
                paid_at: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(applied.sale.amount_paid, 6000.0);
    assert_eq!(applied.sale.status, SaleStatus::Open);

    let applied = payments
        .apply(
            sale.id,
            ApplyPaymentRequest { amount: 4000.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap();
    assert_eq!(applied.sale.amount_paid, 10000.0);
    assert_eq!(applied.sale.status, SaleStatus::Paid);

    // Un peso de más: rechazado, sin recorte, y la venta queda intacta
    let err = payments
        .apply(
            sale.id,
            ApplyPaymentRequest { amount: 1.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Overpayment(_)));

    let sale = sales.get_by_id(sale.id).await.unwrap();
    assert_eq!(sale.amount_paid, 10000.0);
    assert_eq!(sale.status, SaleStatus::Paid);

    let ledger = payments.list_by_sale(sale.id).await.unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.iter().map(|p| p.amount).sum::<f64>(), sale.amount_paid);
}

#[tokio::test]
async fn zero_or_negative_payment_is_rejected() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());
    let payments = PaymentController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 500.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap()
        .data
        .unwrap();

    for amount in [0.0, -10.0] {
        let err = payments
            .apply(
                sale.id,
                ApplyPaymentRequest { amount, method: None, reference: None, paid_at: None },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    let err = payments
        .apply(
            9999,
            ApplyPaymentRequest { amount: 10.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reversing_a_payment_reopens_the_sale_but_not_the_vehicle() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());
    let payments = PaymentController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 1000.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap()
        .data
        .unwrap();

    let applied = payments
        .apply(
            sale.id,
            ApplyPaymentRequest { amount: 1000.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap();
    assert_eq!(applied.sale.status, SaleStatus::Paid);

    let reopened = payments.reverse(applied.payment.id).await.unwrap();
    assert_eq!(reopened.status, SaleStatus::Open);
    assert_eq!(reopened.amount_paid, 0.0);

    // El vehículo vendido sigue SOLD aunque el pago se haya revertido
    let vehicle = vehicles.get_by_id(vehicle.id).await.unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Sold);

    let err = payments.reverse(applied.payment.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn close_if_settled_is_idempotent() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());
    let payments = PaymentController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 300.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap()
        .data
        .unwrap();

    payments
        .apply(
            sale.id,
            ApplyPaymentRequest { amount: 300.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap();

    let first = sales.close_if_settled(sale.id).await.unwrap();
    let second = sales.close_if_settled(sale.id).await.unwrap();
    assert_eq!(first.status, SaleStatus::Paid);
    assert_eq!(second.status, SaleStatus::Paid);
    assert_eq!(first.amount_paid, second.amount_paid);
}

#[tokio::test]
async fn negative_cost_is_rejected_and_totals_accumulate() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let costs = CostController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();

    // Sin costos: total cero
    let total = costs.total_by_vehicle(vehicle.id).await.unwrap();
    assert_eq!(total.total, 0.0);

    let err = costs
        .add(CreateCostRequest {
            vehicle_id: Some(vehicle.id),
            cost_type: CostType::Repair,
            amount: -5.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(costs.list_by_vehicle(vehicle.id).await.unwrap().is_empty());

    costs
        .add(CreateCostRequest {
            vehicle_id: Some(vehicle.id),
            cost_type: CostType::Paperwork,
            amount: 150.0,
            cost_date: None,
            note: Some("traspaso".to_string()),
        })
        .await
        .unwrap();
    costs
        .add(CreateCostRequest {
            vehicle_id: Some(vehicle.id),
            cost_type: CostType::Transport,
            amount: 80.5,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap();

    // Costo de monto cero es válido
    costs
        .add(CreateCostRequest {
            vehicle_id: Some(vehicle.id),
            cost_type: CostType::Other,
            amount: 0.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap();

    // Costo sin vehículo asignado
    let unassigned = costs
        .add(CreateCostRequest {
            vehicle_id: None,
            cost_type: CostType::Other,
            amount: 25.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap();
    assert_eq!(unassigned.vehicle_id, None);

    let total = costs.total_by_vehicle(vehicle.id).await.unwrap();
    assert_eq!(total.total, 230.5);

    let err = costs
        .add(CreateCostRequest {
            vehicle_id: Some(9999),
            cost_type: CostType::Other,
            amount: 1.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_vehicle_cascades_to_all_dependents() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());
    let sales = SaleController::new(pool.clone());
    let payments = PaymentController::new(pool.clone());
    let costs = CostController::new(pool.clone());

    let vehicle = vehicles
        .create(vehicle_request("1HGCM82633A004352", None))
        .await
        .unwrap()
        .data
        .unwrap();
    let sale = sales
        .open(OpenSaleRequest {
            vehicle_id: vehicle.id,
            sale_price: 1000.0,
            sale_date: None,
            notes: None,
        })
        .await
        .unwrap()
        .data
        .unwrap();
    payments
        .apply(
            sale.id,
            ApplyPaymentRequest { amount: 400.0, method: None, reference: None, paid_at: None },
        )
        .await
        .unwrap();
    costs
        .add(CreateCostRequest {
            vehicle_id: Some(vehicle.id),
            cost_type: CostType::Repair,
            amount: 100.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap();
    // Un costo sin asignar debe sobrevivir a la cascada
    costs
        .add(CreateCostRequest {
            vehicle_id: None,
            cost_type: CostType::Other,
            amount: 50.0,
            cost_date: None,
            note: None,
        })
        .await
        .unwrap();
    vehicles
        .add_photo(vehicle.id, CreatePhotoRequest { filename: "frente.jpg".to_string() })
        .await
        .unwrap();

    vehicles.delete(vehicle.id).await.unwrap();

    let sales_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
        .fetch_one(&pool)
        .await
        .unwrap();
    let payments_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
        .fetch_one(&pool)
        .await
        .unwrap();
    let costs_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM costs")
        .fetch_one(&pool)
        .await
        .unwrap();
    let photos_left: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(sales_left, 0);
    assert_eq!(payments_left, 0);
    assert_eq!(costs_left, 1);
    assert_eq!(photos_left, 0);

    let err = vehicles.delete(vehicle.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn schema_reconcile_is_idempotent() {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    schema::create_base_tables(&pool).await.unwrap();

    // Tablas base sin las columnas evolucionadas
    let before = evolution::table_columns(&pool, "vehicles").await.unwrap();
    assert!(!before.contains(&"plate".to_string()));

    let applied = evolution::reconcile(&pool).await;
    assert!(applied > 0);
    let after_first = evolution::table_columns(&pool, "vehicles").await.unwrap();
    assert!(after_first.contains(&"plate".to_string()));
    assert!(after_first.contains(&"seller_document".to_string()));
    assert!(after_first.contains(&"received_date".to_string()));

    // Segunda pasada: no-op, mismo esquema final
    let applied_again = evolution::reconcile(&pool).await;
    assert_eq!(applied_again, 0);
    let after_second = evolution::table_columns(&pool, "vehicles").await.unwrap();
    assert_eq!(after_first, after_second);

    let sales_columns = evolution::table_columns(&pool, "sales").await.unwrap();
    assert!(sales_columns.contains(&"notes".to_string()));
}

#[tokio::test]
async fn demo_seed_only_runs_on_an_empty_inventory() {
    let pool = test_pool().await;
    let vehicles = VehicleController::new(pool.clone());

    seed::seed_demo_if_empty(&pool).await.unwrap();
    seed::seed_demo_if_empty(&pool).await.unwrap();

    let listed = vehicles
        .list(ListVehiclesQuery { q: None, page: None, page_size: None })
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    // Con inventario cargado el seed no agrega nada
    seed::seed_demo_if_empty(&pool).await.unwrap();
    let listed = vehicles
        .list(ListVehiclesQuery { q: None, page: None, page_size: None })
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
}
