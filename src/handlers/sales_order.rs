//! `/pedidos` handlers.

use super::crud::{Messages, Resource};
use crate::model::{SalesOrder, SalesOrderDto};
use crate::repository::Repository;
use crate::state::AppState;
use std::sync::Arc;

impl Resource for SalesOrder {
    type Dto = SalesOrderDto;

    const MESSAGES: Messages = Messages {
        list_failed: "Não foi possível acessar a listagem de pedidos de venda",
        created: "Pedido de venda cadastrado com sucesso!",
        create_failed: "Erro ao cadastrar o pedido. Entre em contato com o administrador do sistema.",
        create_rejected: "Não foi possível cadastrar o pedido. Entre em contato com o administrador do sistema.",
        removed: "Pedido de venda removido com sucesso!",
        remove_failed: "Erro ao remover o pedido. Entre em contato com o administrador do sistema",
        remove_rejected: "Não foi possível remover o pedido. Entre em contato com o administrador do sistema.",
        updated: "Pedido de venda atualizado com sucesso!",
        update_failed: "Erro ao atualizar o pedido. Entre em contato com o administrador do sistema",
        update_rejected: "Não foi possível atualizar o pedido. Entre em contato com o administrador do sistema.",
    };

    fn from_dto(dto: SalesOrderDto) -> Self {
        dto.into()
    }

    fn repository(state: &AppState) -> Arc<dyn Repository<Self>> {
        state.orders.clone()
    }
}
