use crate::dto::Dto;
use crate::list::{ListResponse, PagedItemList};
use chrono::Utc;
use restbase_core::http::StatusCode;
use restbase_core::{ApiResponse, HttpError, RequestContext};
use restbase_data::{Entity, Page, PageFetcher, Pageable, Repository, Sort};
use std::marker::PhantomData;
use std::sync::Arc;

/// Generic CRUD controller: list, detail, soft-delete and restore for any
/// audited entity.
///
/// Type parameters: the entity `E`, its repository `R`, the list/write DTO
/// `D` and the detail DTO `DD` (defaults to `D`). Conversion dispatches
/// through the [`Dto`] trait; the controller itself holds only immutable
/// configuration and the repository handle, so instances are cheap to share.
///
/// # Example
///
/// ```ignore
/// let notes: CrudController<Note, InMemoryRepository<Note>, NoteSummaryDto, NoteDto> =
///     CrudController::builder(repo)
///         .resource("note")
///         .sort(Sort::desc("createdAt"))
///         .build();
/// let app = Router::new().nest("/notes", notes.into_router());
/// ```
pub struct CrudController<E, R, D, DD = D>
where
    E: Entity,
    R: Repository<E>,
{
    pub(crate) repository: R,
    pub(crate) paginated: bool,
    pub(crate) resource: String,
    pub(crate) sort: Sort,
    pub(crate) fetcher: Option<Arc<dyn PageFetcher<E>>>,
    pub(crate) _dto: PhantomData<fn() -> (D, DD)>,
}

/// Builder for [`CrudController`]. Obtained via [`CrudController::builder`].
pub struct CrudControllerBuilder<E, R, D, DD = D>
where
    E: Entity,
    R: Repository<E>,
{
    repository: R,
    paginated: bool,
    resource: Option<String>,
    sort: Sort,
    fetcher: Option<Arc<dyn PageFetcher<E>>>,
    _dto: PhantomData<fn() -> (D, DD)>,
}

impl<E, R, D, DD> CrudController<E, R, D, DD>
where
    E: Entity,
    R: Repository<E>,
{
    pub fn builder(repository: R) -> CrudControllerBuilder<E, R, D, DD> {
        CrudControllerBuilder {
            repository,
            paginated: true,
            resource: None,
            sort: Sort::unsorted(),
            fetcher: None,
            _dto: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl<E, R, D, DD> CrudControllerBuilder<E, R, D, DD>
where
    E: Entity,
    R: Repository<E>,
{
    /// Whether `list` pages through the collection (default) or returns it
    /// whole.
    pub fn paginated(mut self, paginated: bool) -> Self {
        self.paginated = paginated;
        self
    }

    /// Name used in response messages. Defaults to the entity type name.
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Ordering handed to the fetcher on every paginated list. Defaults to
    /// [`Sort::unsorted`].
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Custom page-fetching strategy. When unset, the paginated list
    /// delegates to [`Repository::find_all_paged`].
    pub fn fetcher(mut self, fetcher: impl PageFetcher<E> + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    pub fn build(self) -> CrudController<E, R, D, DD> {
        CrudController {
            repository: self.repository,
            paginated: self.paginated,
            resource: self
                .resource
                .unwrap_or_else(|| short_type_name::<E>().to_string()),
            sort: self.sort,
            fetcher: self.fetcher,
            _dto: PhantomData,
        }
    }
}

impl<E, R, D, DD> CrudController<E, R, D, DD>
where
    E: Entity,
    R: Repository<E>,
    D: Dto<E>,
    DD: Dto<E>,
{
    /// List entities as DTOs inside a paged envelope.
    ///
    /// Absent or negative `page` falls back to 0, absent or negative `size`
    /// to 10; a `size` of zero passes through. Always answers 200 — an empty
    /// collection is `items: []` with zero totals, never an error. Performs
    /// no write.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<ListResponse<D>, HttpError> {
        if self.paginated {
            if let Some(fetcher) = &self.fetcher {
                return self.list_with(ctx, fetcher.as_ref(), page, size).await;
            }
            let pageable = Pageable::from_request(page, size, self.sort.clone());
            let items = self.repository.find_all_paged(&pageable).await?;
            tracing::debug!(
                resource = %self.resource,
                login = ctx.login.as_deref(),
                page = pageable.page,
                size = pageable.size,
                total = items.total_elements,
                "listed"
            );
            return Ok(self.list_envelope(&items));
        }

        // Unpaged: the whole collection, bypassing the fetcher entirely.
        let items = Page::unpaged(self.repository.find_all().await?);
        tracing::debug!(
            resource = %self.resource,
            login = ctx.login.as_deref(),
            total = items.total_elements,
            "listed unpaged"
        );
        Ok(self.list_envelope(&items))
    }

    /// List through an explicit fetching strategy.
    ///
    /// Applies the same parameter normalization as [`CrudController::list`];
    /// the configured sort rides along in the `Pageable`.
    pub async fn list_with(
        &self,
        ctx: &RequestContext,
        fetcher: &dyn PageFetcher<E>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<ListResponse<D>, HttpError> {
        let pageable = Pageable::from_request(page, size, self.sort.clone());
        let items = fetcher.get_items(&pageable).await?;
        tracing::debug!(
            resource = %self.resource,
            login = ctx.login.as_deref(),
            page = pageable.page,
            size = pageable.size,
            total = items.total_elements,
            "listed via fetcher"
        );
        Ok(self.list_envelope(&items))
    }

    /// Detail view of one entity.
    ///
    /// 404 when the id resolves to nothing; 401 when the entity is
    /// soft-deleted (deliberately not 404); 200 with the detail DTO
    /// otherwise. Performs no write.
    pub async fn details(
        &self,
        ctx: &RequestContext,
        id: &E::Id,
    ) -> Result<ApiResponse<DD>, HttpError> {
        let Some(entity) = self.repository.find_by_id(id).await? else {
            return Ok(self.not_found(id));
        };
        if entity.is_deleted() {
            return Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                format!("element with id {id} has been deleted"),
            ));
        }
        tracing::debug!(resource = %self.resource, login = ctx.login.as_deref(), id = %id, "details");
        Ok(
            ApiResponse::new(StatusCode::OK, format!("{} details", self.resource))
                .with_data(DD::from_entity(&entity)),
        )
    }

    /// Restore a soft-deleted entity by clearing its deletion timestamp.
    ///
    /// 404 for an unknown id, 401 when the entity is already active; on
    /// success exactly one repository write happens and the saved entity
    /// comes back as a DTO.
    pub async fn restore(
        &self,
        ctx: &RequestContext,
        id: &E::Id,
    ) -> Result<ApiResponse<D>, HttpError> {
        let Some(mut entity) = self.repository.find_by_id(id).await? else {
            return Ok(self.not_found(id));
        };
        if !entity.is_deleted() {
            return Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                format!("element with id {id} cannot be restored because it is still active"),
            ));
        }
        entity.clear_deleted();
        let restored = self.repository.save(&entity).await?;
        tracing::info!(resource = %self.resource, login = ctx.login.as_deref(), id = %id, "restored");
        Ok(
            ApiResponse::new(StatusCode::OK, format!("{} restored", self.resource))
                .with_data(D::from_entity(&restored)),
        )
    }

    /// Soft-delete an entity by stamping its deletion timestamp.
    ///
    /// 404 for an unknown id, 401 when the entity is already deleted (a
    /// repeat delete writes nothing); on success exactly one repository
    /// write happens and the saved entity comes back as a DTO.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        id: &E::Id,
    ) -> Result<ApiResponse<D>, HttpError> {
        let Some(mut entity) = self.repository.find_by_id(id).await? else {
            return Ok(self.not_found(id));
        };
        if entity.is_deleted() {
            return Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                format!("element with id {id} has already been deleted"),
            ));
        }
        entity.mark_deleted(Utc::now());
        let deleted = self.repository.save(&entity).await?;
        tracing::info!(resource = %self.resource, login = ctx.login.as_deref(), id = %id, "soft-deleted");
        Ok(
            ApiResponse::new(StatusCode::OK, format!("{} deleted", self.resource))
                .with_data(D::from_entity(&deleted)),
        )
    }

    fn list_envelope(&self, page: &Page<E>) -> ListResponse<D> {
        ApiResponse::new(StatusCode::OK, format!("List of {}", self.resource))
            .with_data(PagedItemList::from_page(page))
    }

    fn not_found<T>(&self, id: &E::Id) -> ApiResponse<T> {
        ApiResponse::new(
            StatusCode::NOT_FOUND,
            format!("element with id {id} not found"),
        )
    }
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
