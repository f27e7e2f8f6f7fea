//! Re-exports of the HTTP types used across restbase crates.
//!
//! Downstream crates import from here instead of depending on `axum`
//! directly, so a framework upgrade stays a single-crate change.

pub use axum::body::Body;
pub use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
pub use axum::{serve, Extension, Json, Router};
pub use bytes::Bytes;

pub mod extract {
    pub use axum::extract::{
        FromRef, FromRequest, FromRequestParts, Path, Query, Request, State,
    };
}

pub mod response {
    pub use axum::response::{IntoResponse, Response};
}

pub mod middleware {
    pub use axum::middleware::{from_fn, Next};
}

pub mod routing {
    pub use axum::routing::{delete, get, patch, post, put};
}
