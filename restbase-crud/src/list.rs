use crate::dto::Dto;
use restbase_core::ApiResponse;
use restbase_data::{Entity, Page};
use serde::Serialize;

/// Payload of the list endpoint: one page of DTOs plus pagination totals.
///
/// Invariants: `total_elements == 0` implies `items` is empty, and
/// `items.len()` never exceeds the requested page size.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedItemList<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<T> PagedItemList<T> {
    pub fn new(items: Vec<T>, total_pages: u64, total_elements: u64) -> Self {
        Self {
            items,
            total_pages,
            total_elements,
        }
    }

    /// Convert a page of entities, carrying the fetcher's totals over.
    pub fn from_page<E>(page: &Page<E>) -> Self
    where
        E: Entity,
        T: Dto<E>,
    {
        Self {
            items: T::from_entities(&page.content),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }
}

/// The envelope returned by the list endpoint.
pub type ListResponse<T> = ApiResponse<PagedItemList<T>>;
