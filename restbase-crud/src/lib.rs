pub mod controller;
pub mod dto;
pub mod list;
pub mod routes;

pub use controller::{CrudController, CrudControllerBuilder};
pub use dto::Dto;
pub use list::{ListResponse, PagedItemList};
pub use routes::ListParams;

pub mod prelude {
    //! Re-exports of the most commonly used CRUD types.
    pub use crate::{CrudController, Dto, ListResponse, PagedItemList};
}
