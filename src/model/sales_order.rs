use super::{coerce, Entity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of `pedido_venda`. Car and customer ids are not checked against their tables.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SalesOrder {
    #[serde(rename = "idPedido")]
    #[sqlx(rename = "id_pedido")]
    id: i32,
    #[serde(rename = "idCarro")]
    #[sqlx(rename = "id_carro")]
    pub car_id: i32,
    #[serde(rename = "idCliente")]
    #[sqlx(rename = "id_cliente")]
    pub customer_id: i32,
    #[serde(rename = "dataPedido")]
    #[sqlx(rename = "data_pedido")]
    pub order_date: NaiveDate,
    #[serde(rename = "valorPedido")]
    #[sqlx(rename = "valor_pedido")]
    pub total: f64,
}

impl SalesOrder {
    pub fn new(car_id: i32, customer_id: i32, order_date: NaiveDate, total: f64) -> Self {
        SalesOrder {
            id: 0,
            car_id,
            customer_id,
            order_date,
            total,
        }
    }
}

impl Entity for SalesOrder {
    const NAME: &'static str = "pedido";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderDto {
    #[serde(deserialize_with = "coerce::int")]
    pub id_cliente: i32,
    #[serde(deserialize_with = "coerce::int")]
    pub id_carro: i32,
    #[serde(deserialize_with = "coerce::date")]
    pub data_pedido: NaiveDate,
    #[serde(deserialize_with = "coerce::float")]
    pub valor_pedido: f64,
}

impl From<SalesOrderDto> for SalesOrder {
    fn from(dto: SalesOrderDto) -> Self {
        SalesOrder::new(dto.id_carro, dto.id_cliente, dto.data_pedido, dto.valor_pedido)
    }
}
