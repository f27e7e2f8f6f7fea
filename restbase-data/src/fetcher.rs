use crate::error::DataError;
use crate::page::{Page, Pageable};
use async_trait::async_trait;
use std::future::Future;

/// Per-entity strategy returning one page of items plus pagination totals.
///
/// This is the seam that lets a caller plug entity-specific filtering and
/// sorting into the generic list operation without touching the controller.
/// Thanks to the blanket impl below, any async closure of the right shape is
/// a fetcher:
///
/// ```ignore
/// let fetcher = move |pageable: Pageable| {
///     let repo = repo.clone();
///     async move { repo.find_all_paged(&pageable).await }
/// };
/// ```
#[async_trait]
pub trait PageFetcher<E>: Send + Sync {
    async fn get_items(&self, pageable: &Pageable) -> Result<Page<E>, DataError>;
}

#[async_trait]
impl<E, F, Fut> PageFetcher<E> for F
where
    E: Send + 'static,
    F: Fn(Pageable) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<E>, DataError>> + Send,
{
    async fn get_items(&self, pageable: &Pageable) -> Result<Page<E>, DataError> {
        (self)(pageable.clone()).await
    }
}
