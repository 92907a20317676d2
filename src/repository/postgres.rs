//! PostgreSQL repositories. Values are always bound, never spliced into SQL text.

use super::{expect_affected, Repository};
use crate::error::RepoError;
use crate::model::{Customer, Entity, SalesOrder};
use async_trait::async_trait;
use sqlx::PgPool;

const CUSTOMER_SELECT: &str = "SELECT id_cliente, nome, cpf, telefone FROM cliente ORDER BY id_cliente";
const CUSTOMER_INSERT: &str = "INSERT INTO cliente (nome, cpf, telefone) VALUES ($1, $2, $3) RETURNING id_cliente";
const CUSTOMER_UPDATE: &str = "UPDATE cliente SET nome = $1, cpf = $2, telefone = $3 WHERE id_cliente = $4";
const CUSTOMER_DELETE: &str = "DELETE FROM cliente WHERE id_cliente = $1";

// valor_pedido is NUMERIC; round-trip it as float8 so it decodes into f64.
const ORDER_SELECT: &str = "SELECT id_pedido, id_carro, id_cliente, data_pedido, valor_pedido::float8 AS valor_pedido \
     FROM pedido_venda ORDER BY id_pedido";
const ORDER_INSERT: &str = "INSERT INTO pedido_venda (id_cliente, id_carro, data_pedido, valor_pedido) \
     VALUES ($1, $2, $3, $4::float8) RETURNING id_pedido";
const ORDER_UPDATE: &str = "UPDATE pedido_venda SET id_cliente = $1, id_carro = $2, data_pedido = $3, valor_pedido = $4::float8 \
     WHERE id_pedido = $5";
const ORDER_DELETE: &str = "DELETE FROM pedido_venda WHERE id_pedido = $1";

async fn ping(pool: &PgPool) -> Result<(), RepoError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        PgCustomerRepository { pool }
    }
}

#[async_trait]
impl Repository<Customer> for PgCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, RepoError> {
        tracing::debug!(sql = %CUSTOMER_SELECT, "query");
        let rows = sqlx::query_as::<_, Customer>(CUSTOMER_SELECT)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, customer: &Customer) -> Result<i32, RepoError> {
        tracing::debug!(sql = %CUSTOMER_INSERT, "query");
        let id: Option<i32> = sqlx::query_scalar(CUSTOMER_INSERT)
            .bind(&customer.name)
            .bind(&customer.tax_id)
            .bind(&customer.phone)
            .fetch_optional(&self.pool)
            .await?;
        id.ok_or(RepoError::Backend(sqlx::Error::RowNotFound))
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepoError> {
        if !customer.is_persisted() {
            return expect_affected::<Customer>(0, customer.id());
        }
        tracing::debug!(sql = %CUSTOMER_UPDATE, id = customer.id(), "query");
        let done = sqlx::query(CUSTOMER_UPDATE)
            .bind(&customer.name)
            .bind(&customer.tax_id)
            .bind(&customer.phone)
            .bind(customer.id())
            .execute(&self.pool)
            .await?;
        expect_affected::<Customer>(done.rows_affected(), customer.id())
    }

    async fn remove(&self, id: i32) -> Result<(), RepoError> {
        tracing::debug!(sql = %CUSTOMER_DELETE, id, "query");
        let done = sqlx::query(CUSTOMER_DELETE).bind(id).execute(&self.pool).await?;
        expect_affected::<Customer>(done.rows_affected(), id)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        ping(&self.pool).await
    }
}

pub struct PgSalesOrderRepository {
    pool: PgPool,
}

impl PgSalesOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        PgSalesOrderRepository { pool }
    }
}

#[async_trait]
impl Repository<SalesOrder> for PgSalesOrderRepository {
    async fn list(&self) -> Result<Vec<SalesOrder>, RepoError> {
        tracing::debug!(sql = %ORDER_SELECT, "query");
        let rows = sqlx::query_as::<_, SalesOrder>(ORDER_SELECT)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, order: &SalesOrder) -> Result<i32, RepoError> {
        tracing::debug!(sql = %ORDER_INSERT, "query");
        let id: Option<i32> = sqlx::query_scalar(ORDER_INSERT)
            .bind(order.customer_id)
            .bind(order.car_id)
            .bind(order.order_date)
            .bind(order.total)
            .fetch_optional(&self.pool)
            .await?;
        id.ok_or(RepoError::Backend(sqlx::Error::RowNotFound))
    }

    async fn update(&self, order: &SalesOrder) -> Result<(), RepoError> {
        if !order.is_persisted() {
            return expect_affected::<SalesOrder>(0, order.id());
        }
        tracing::debug!(sql = %ORDER_UPDATE, id = order.id(), "query");
        let done = sqlx::query(ORDER_UPDATE)
            .bind(order.customer_id)
            .bind(order.car_id)
            .bind(order.order_date)
            .bind(order.total)
            .bind(order.id())
            .execute(&self.pool)
            .await?;
        expect_affected::<SalesOrder>(done.rows_affected(), order.id())
    }

    async fn remove(&self, id: i32) -> Result<(), RepoError> {
        tracing::debug!(sql = %ORDER_DELETE, id, "query");
        let done = sqlx::query(ORDER_DELETE).bind(id).execute(&self.pool).await?;
        expect_affected::<SalesOrder>(done.rows_affected(), id)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        ping(&self.pool).await
    }
}
