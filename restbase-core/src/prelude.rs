//! restbase-core prelude — import the usual suspects with a single `use`.

pub use crate::context::{attach_identity, CallerIdentity, RequestContext};
pub use crate::envelope::ApiResponse;
pub use crate::error::HttpError;
pub use crate::layers::{default_cors, default_trace, init_tracing};
pub use crate::types::{ApiResult, EnvelopeResult};

pub use crate::http::extract::{Path, Query, State};
pub use crate::http::response::{IntoResponse, Response};
pub use crate::http::{Json, Router, StatusCode};
