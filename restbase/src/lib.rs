//! restbase — a generic REST CRUD base layer over Axum.
//!
//! Wire any audited entity into ready-made list / detail / soft-delete /
//! restore endpoints: implement [`Entity`](restbase_data::Entity) and
//! [`Dto`](restbase_crud::Dto), hand a repository to
//! [`CrudController`](restbase_crud::CrudController), and nest the resulting
//! router at a mount point. Import everything you need with:
//!
//! ```ignore
//! use restbase::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature | Default | Crate            |
//! |---------|---------|------------------|
//! | `data`  | **yes** | `restbase-data`  |
//! | `crud`  | **yes** | `restbase-crud`  |

pub use restbase_core::*;

#[cfg(feature = "data")]
pub use restbase_data;

#[cfg(feature = "crud")]
pub use restbase_crud;

/// Unified prelude — import everything with `use restbase::prelude::*`.
pub mod prelude {
    pub use restbase_core::prelude::*;

    #[cfg(feature = "data")]
    pub use restbase_data::prelude::*;

    #[cfg(feature = "crud")]
    pub use restbase_crud::prelude::*;
}
