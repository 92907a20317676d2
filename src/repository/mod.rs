//! Data-access layer: one `Repository` per entity, backed by PostgreSQL or memory.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::{PgCustomerRepository, PgSalesOrderRepository};

use crate::error::RepoError;
use crate::model::Entity;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All rows, ordered by primary key.
    async fn list(&self) -> Result<Vec<E>, RepoError>;

    /// Insert and return the generated identifier. The entity's own id is ignored.
    async fn create(&self, entity: &E) -> Result<i32, RepoError>;

    /// Overwrite every field of the row identified by `entity.id()`.
    async fn update(&self, entity: &E) -> Result<(), RepoError>;

    async fn remove(&self, id: i32) -> Result<(), RepoError>;

    /// Cheap round-trip to the backing store, for readiness checks.
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

/// Zero affected rows means the identifier did not match anything.
pub(crate) fn expect_affected<E: Entity>(rows: u64, id: i32) -> Result<(), RepoError> {
    if rows == 0 {
        Err(RepoError::NotFound { entity: E::NAME, id })
    } else {
        Ok(())
    }
}
