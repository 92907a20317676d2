//! Car sales backend: customer and sales order CRUD over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;

pub use config::{ServerConfig, StorageBackend};
pub use error::{ApiError, ConfigError, ErrorMode, RepoError};
pub use model::{Customer, CustomerDto, Entity, SalesOrder, SalesOrderDto};
pub use repository::{MemoryRepository, PgCustomerRepository, PgSalesOrderRepository, Repository};
pub use response::MessageBody;
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
