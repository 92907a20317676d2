use super::Entity;
use serde::{Deserialize, Serialize};

/// Row of `cliente`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Customer {
    #[serde(rename = "idCliente")]
    #[sqlx(rename = "id_cliente")]
    id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    /// National tax id (CPF).
    #[serde(rename = "cpf")]
    #[sqlx(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>, phone: impl Into<String>) -> Self {
        Customer {
            id: 0,
            name: name.into(),
            tax_id: tax_id.into(),
            phone: phone.into(),
        }
    }
}

impl Entity for Customer {
    const NAME: &'static str = "cliente";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Request body for create and update. `email` is accepted in place of `cpf`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDto {
    pub nome: String,
    #[serde(alias = "email")]
    pub cpf: String,
    pub telefone: String,
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Customer::new(dto.nome, dto.cpf, dto.telefone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_customer_is_unpersisted() {
        let c = Customer::new("Ana", "12345678900", "11999990000");
        assert_eq!(c.id(), 0);
        assert!(!c.is_persisted());
    }

    #[test]
    fn serializes_with_wire_names() {
        let mut c = Customer::new("Ana", "12345678900", "11999990000");
        c.set_id(7);
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            json!({"idCliente": 7, "nome": "Ana", "cpf": "12345678900", "telefone": "11999990000"})
        );
    }

    #[test]
    fn dto_accepts_email_in_place_of_cpf() {
        let dto: CustomerDto =
            serde_json::from_value(json!({"nome": "Bia", "email": "bia@example.com", "telefone": "1"})).unwrap();
        let c = Customer::from(dto);
        assert_eq!(c.tax_id, "bia@example.com");
        assert_eq!(c.id(), 0);
    }

    #[test]
    fn dto_without_nome_is_rejected() {
        let res: Result<CustomerDto, _> = serde_json::from_value(json!({"cpf": "1", "telefone": "2"}));
        assert!(res.is_err());
    }
}
