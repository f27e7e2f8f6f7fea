use crate::entity::Entity;
use crate::error::DataError;
use crate::page::{Page, Pageable};
use crate::repository::Repository;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Insertion-ordered in-memory [`Repository`] backend.
///
/// The reference backend for demos and tests. Stamps `created_at` on first
/// save and `updated_at` on every save, the way an ORM-backed store would.
/// `Pageable::sort` is carried but not interpreted — ordering is insertion
/// order; a real backend or a custom fetcher applies the sort.
pub struct InMemoryRepository<E> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Pre-populate the store, bypassing save-time stamping.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, DataError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|e| e.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, DataError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_all_paged(&self, pageable: &Pageable) -> Result<Page<E>, DataError> {
        let items = self.items.read().await;
        let total = items.len() as u64;
        let start = pageable.offset().min(total) as usize;
        let end = start
            .saturating_add(pageable.size as usize)
            .min(items.len());
        Ok(Page::new(items[start..end].to_vec(), pageable, total))
    }

    async fn save(&self, entity: &E) -> Result<E, DataError> {
        let mut items = self.items.write().await;
        let now = Utc::now();
        let mut stored = entity.clone();
        match items.iter().position(|e| e.id() == entity.id()) {
            Some(index) => {
                // created_at is immutable once set
                stored.audit_mut().created_at = items[index].created_at();
                stored.audit_mut().updated_at = now;
                items[index] = stored.clone();
            }
            None => {
                stored.audit_mut().created_at = now;
                stored.audit_mut().updated_at = now;
                items.push(stored.clone());
            }
        }
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, DataError> {
        Ok(self.items.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Audit;
    use crate::sort::Sort;

    #[derive(Debug, Clone)]
    struct Item {
        id: u64,
        label: String,
        audit: Audit,
    }

    impl Item {
        fn new(id: u64, label: &str) -> Self {
            Self {
                id,
                label: label.to_string(),
                audit: Audit::new(),
            }
        }
    }

    impl Entity for Item {
        type Id = u64;

        fn id(&self) -> &u64 {
            &self.id
        }
        fn audit(&self) -> &Audit {
            &self.audit
        }
        fn audit_mut(&mut self) -> &mut Audit {
            &mut self.audit
        }
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryRepository::new();
        repo.save(&Item::new(1, "one")).await.unwrap();

        let found = repo.find_by_id(&1).await.unwrap().unwrap();
        assert_eq!(found.label, "one");
        assert!(repo.find_by_id(&2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_preserves_created_at_and_restamps_updated_at() {
        let repo = InMemoryRepository::new();
        let first = repo.save(&Item::new(1, "one")).await.unwrap();

        let mut edited = first.clone();
        edited.label = "uno".to_string();
        let second = repo.save(&edited).await.unwrap();

        assert_eq!(second.created_at(), first.created_at());
        assert!(second.updated_at() >= first.updated_at());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn paging_slices_in_insertion_order() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.save(&Item::new(i, &format!("item-{i}"))).await.unwrap();
        }

        let page = repo
            .find_all_paged(&Pageable::new(1, 2, Sort::unsorted()))
            .await
            .unwrap();
        let ids: Vec<_> = page.content.iter().map(|e| e.id).collect();
        assert_eq!(ids, [2, 3]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn paging_past_the_end_is_empty() {
        let repo = InMemoryRepository::new();
        repo.save(&Item::new(1, "one")).await.unwrap();

        let page = repo
            .find_all_paged(&Pageable::new(9, 10, Sort::unsorted()))
            .await
            .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }
}
