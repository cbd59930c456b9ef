//! Controller de ventas (ledger de ventas)
//!
//! Máquina de estados: OPEN -> PAID cuando los pagos alcanzan el precio.
//! No hay transición inversa acá; la reversión de pagos vive en el
//! controller de pagos.

use crate::dto::common::ApiResponse;
use crate::dto::sale_dto::{OpenSaleRequest, SaleResponse};
use crate::repositories::SaleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

pub struct SaleController {
    repository: SaleRepository,
}

impl SaleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: SaleRepository::new(pool),
        }
    }

    /// Abrir una venta: precio > 0, vehículo existente. Deja el vehículo SOLD.
    pub async fn open(
        &self,
        request: OpenSaleRequest,
    ) -> Result<ApiResponse<SaleResponse>, AppError> {
        request.validate()?;

        if request.sale_price <= 0.0 {
            return Err(AppError::Validation(
                "El precio de venta debe ser mayor a cero".to_string(),
            ));
        }

        let sale_date = request.sale_date.unwrap_or_else(|| Utc::now().date_naive());
        let sale = self
            .repository
            .open(request.vehicle_id, sale_date, request.sale_price, request.notes)
            .await?;

        Ok(ApiResponse::success_with_message(
            sale.into(),
            "Venta abierta exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<SaleResponse, AppError> {
        let sale = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Venta no encontrada".to_string()))?;

        Ok(sale.into())
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<SaleResponse>, AppError> {
        let sales = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(sales.into_iter().map(Into::into).collect())
    }

    /// Recalcular la liquidación de la venta; correrlo de más no cambia nada.
    pub async fn close_if_settled(&self, id: i64) -> Result<SaleResponse, AppError> {
        let sale = self.repository.close_if_settled(id).await?;
        Ok(sale.into())
    }
}
