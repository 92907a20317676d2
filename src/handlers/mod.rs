//! HTTP handlers for customer and sales order CRUD.

pub mod crud;
mod customer;
mod sales_order;

pub use crud::{create, list, remove, update, Messages, Resource};
