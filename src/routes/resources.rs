//! Customer and sales order routes.

use crate::handlers::{create, list, remove, update};
use crate::model::{Customer, SalesOrder};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/clientes", get(list::<Customer>).post(create::<Customer>))
        .route(
            "/clientes/:idCliente",
            put(update::<Customer>).delete(remove::<Customer>),
        )
        .route("/pedidos", get(list::<SalesOrder>).post(create::<SalesOrder>))
        .route(
            "/pedidos/:idPedido",
            put(update::<SalesOrder>).delete(remove::<SalesOrder>),
        )
        .with_state(state)
}
