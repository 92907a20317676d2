//! Shared application state for all routes. Repositories are injected, not global.

use crate::error::ErrorMode;
use crate::model::{Customer, SalesOrder};
use crate::repository::{MemoryRepository, PgCustomerRepository, PgSalesOrderRepository, Repository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn Repository<Customer>>,
    pub orders: Arc<dyn Repository<SalesOrder>>,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn postgres(pool: PgPool, error_mode: ErrorMode) -> Self {
        AppState {
            customers: Arc::new(PgCustomerRepository::new(pool.clone())),
            orders: Arc::new(PgSalesOrderRepository::new(pool)),
            error_mode,
        }
    }

    pub fn in_memory(error_mode: ErrorMode) -> Self {
        AppState {
            customers: Arc::new(MemoryRepository::<Customer>::new()),
            orders: Arc::new(MemoryRepository::<SalesOrder>::new()),
            error_mode,
        }
    }
}
