//! `/clientes` handlers.

use super::crud::{Messages, Resource};
use crate::model::{Customer, CustomerDto};
use crate::repository::Repository;
use crate::state::AppState;
use std::sync::Arc;

impl Resource for Customer {
    type Dto = CustomerDto;

    const MESSAGES: Messages = Messages {
        list_failed: "Erro ao recuperar as informações dos clientes",
        created: "Cliente cadastrado com sucesso!",
        create_failed: "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.",
        create_rejected: "Não foi possível cadastrar o cliente. Entre em contato com o administrador do sistema.",
        removed: "O cliente foi removido com sucesso!",
        remove_failed: "Erro ao remover o cliente. Entre em contato com o administrador do sistema",
        remove_rejected: "Não foi possível remover o cliente. Entre em contato com o administrador do sistema.",
        updated: "Cliente atualizado com sucesso!",
        update_failed: "Erro ao atualizar o cliente. Entre em contato com o administrador do sistema",
        update_rejected: "Não foi possível atualizar o cliente. Entre em contato com o administrador do sistema",
    };

    fn from_dto(dto: CustomerDto) -> Self {
        dto.into()
    }

    fn repository(state: &AppState) -> Arc<dyn Repository<Self>> {
        state.customers.clone()
    }
}
