use crate::controller::CrudController;
use crate::dto::Dto;
use crate::list::ListResponse;
use restbase_core::http::extract::{Path, Query, State};
use restbase_core::http::routing::{delete, get, put};
use restbase_core::http::Router;
use restbase_core::{ApiResponse, HttpError, RequestContext};
use restbase_data::{Entity, Repository};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters of the list endpoint. Both are optional; normalization
/// happens in [`Pageable::from_request`](restbase_data::Pageable::from_request).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl<E, R, D, DD> CrudController<E, R, D, DD>
where
    E: Entity,
    E::Id: DeserializeOwned,
    R: Repository<E> + 'static,
    D: Dto<E> + Serialize + 'static,
    DD: Dto<E> + Serialize + 'static,
{
    /// Consume the controller into a router mounting the four endpoints:
    ///
    /// - `GET /` — paged list
    /// - `GET /{id}` — detail
    /// - `PUT /{id}/restore` — restore
    /// - `DELETE /{id}/delete` — soft delete
    ///
    /// Nest it at a per-entity mount point:
    /// `Router::new().nest("/notes", controller.into_router())`.
    pub fn into_router(self) -> Router {
        let controller = Arc::new(self);
        Router::new()
            .route("/", get(list_items::<E, R, D, DD>))
            .route("/{id}", get(item_details::<E, R, D, DD>))
            .route("/{id}/restore", put(restore_item::<E, R, D, DD>))
            .route("/{id}/delete", delete(delete_item::<E, R, D, DD>))
            .with_state(controller)
    }
}

async fn list_items<E, R, D, DD>(
    State(controller): State<Arc<CrudController<E, R, D, DD>>>,
    ctx: RequestContext,
    Query(params): Query<ListParams>,
) -> Result<ListResponse<D>, HttpError>
where
    E: Entity,
    R: Repository<E> + 'static,
    D: Dto<E> + Serialize + 'static,
    DD: Dto<E> + Serialize + 'static,
{
    controller.list(&ctx, params.page, params.size).await
}

async fn item_details<E, R, D, DD>(
    State(controller): State<Arc<CrudController<E, R, D, DD>>>,
    ctx: RequestContext,
    Path(id): Path<E::Id>,
) -> Result<ApiResponse<DD>, HttpError>
where
    E: Entity,
    E::Id: DeserializeOwned,
    R: Repository<E> + 'static,
    D: Dto<E> + Serialize + 'static,
    DD: Dto<E> + Serialize + 'static,
{
    controller.details(&ctx, &id).await
}

async fn restore_item<E, R, D, DD>(
    State(controller): State<Arc<CrudController<E, R, D, DD>>>,
    ctx: RequestContext,
    Path(id): Path<E::Id>,
) -> Result<ApiResponse<D>, HttpError>
where
    E: Entity,
    E::Id: DeserializeOwned,
    R: Repository<E> + 'static,
    D: Dto<E> + Serialize + 'static,
    DD: Dto<E> + Serialize + 'static,
{
    controller.restore(&ctx, &id).await
}

async fn delete_item<E, R, D, DD>(
    State(controller): State<Arc<CrudController<E, R, D, DD>>>,
    ctx: RequestContext,
    Path(id): Path<E::Id>,
) -> Result<ApiResponse<D>, HttpError>
where
    E: Entity,
    E::Id: DeserializeOwned,
    R: Repository<E> + 'static,
    D: Dto<E> + Serialize + 'static,
    DD: Dto<E> + Serialize + 'static,
{
    controller.delete(&ctx, &id).await
}
