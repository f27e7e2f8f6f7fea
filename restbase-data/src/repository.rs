use crate::entity::Entity;
use crate::error::DataError;
use crate::page::{Page, Pageable};
use std::future::Future;

/// Generic async repository contract — the seam to the persistence engine.
///
/// Uses RPITIT (return-position `impl Trait` in traits). The backend owns
/// locking, transactions and write isolation; callers here get no atomicity
/// across a read-then-write sequence.
///
/// `save` returns the stored entity with its audit timestamps stamped by the
/// backend: `created_at` once on first save, `updated_at` on every save.
pub trait Repository<E: Entity>: Send + Sync {
    fn find_by_id(
        &self,
        id: &E::Id,
    ) -> impl Future<Output = Result<Option<E>, DataError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<E>, DataError>> + Send;

    fn find_all_paged(
        &self,
        pageable: &Pageable,
    ) -> impl Future<Output = Result<Page<E>, DataError>> + Send;

    fn save(&self, entity: &E) -> impl Future<Output = Result<E, DataError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;
}
