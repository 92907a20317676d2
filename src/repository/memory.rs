//! In-process repository for `STORAGE=memory` and for tests.

use super::{expect_affected, Repository};
use crate::error::RepoError;
use crate::model::Entity;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<E> {
    next_id: i32,
    rows: BTreeMap<i32, E>,
}

/// Rows keyed by id; ids start at 1 and are never reused, like a SERIAL column.
pub struct MemoryRepository<E> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        MemoryRepository {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, entity: &E) -> Result<i32, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Validation(format!("{} id sequence exhausted", E::NAME)))?;
        let mut row = entity.clone();
        row.set_id(id);
        table.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, entity: &E) -> Result<(), RepoError> {
        if !entity.is_persisted() {
            return expect_affected::<E>(0, entity.id());
        }
        let mut table = self.table.write().await;
        let affected = match table.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                1
            }
            None => 0,
        };
        expect_affected::<E>(affected, entity.id())
    }

    async fn remove(&self, id: i32) -> Result<(), RepoError> {
        let removed = self.table.write().await.rows.remove(&id);
        expect_affected::<E>(u64::from(removed.is_some()), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;

    #[tokio::test]
    async fn create_assigns_increasing_positive_ids() {
        let repo = MemoryRepository::<Customer>::new();
        let a = repo.create(&Customer::new("Ana", "1", "2")).await.unwrap();
        let b = repo.create(&Customer::new("Bia", "3", "4")).await.unwrap();
        assert!(a > 0);
        assert!(b > a);
        let rows = repo.list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), a);
        assert_eq!(rows[0].name, "Ana");
    }

    #[tokio::test]
    async fn remove_twice_fails_the_second_time() {
        let repo = MemoryRepository::<Customer>::new();
        let id = repo.create(&Customer::new("Ana", "1", "2")).await.unwrap();
        assert!(repo.remove(id).await.is_ok());
        assert!(matches!(
            repo.remove(id).await,
            Err(RepoError::NotFound { entity: "cliente", .. })
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let repo = MemoryRepository::<Customer>::new();
        let first = repo.create(&Customer::new("Ana", "1", "2")).await.unwrap();
        repo.remove(first).await.unwrap();
        let second = repo.create(&Customer::new("Bia", "3", "4")).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let repo = MemoryRepository::<Customer>::new();
        let mut ghost = Customer::new("Ana", "1", "2");
        ghost.set_id(999);
        assert!(matches!(repo.update(&ghost).await, Err(RepoError::NotFound { id: 999, .. })));
    }

    #[tokio::test]
    async fn update_of_unsaved_entity_is_not_found() {
        let repo = MemoryRepository::<Customer>::new();
        repo.create(&Customer::new("Ana", "1", "2")).await.unwrap();
        let unsaved = Customer::new("Bia", "3", "4");
        assert!(matches!(repo.update(&unsaved).await, Err(RepoError::NotFound { id: 0, .. })));
        assert_eq!(repo.list().await.unwrap()[0].name, "Ana");
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let repo = MemoryRepository::<Customer>::new();
        let id = repo.create(&Customer::new("Ana", "1", "2")).await.unwrap();
        let mut changed = Customer::new("Ana Maria", "1", "3");
        changed.set_id(id);
        repo.update(&changed).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec![changed]);
    }
}
