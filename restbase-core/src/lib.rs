pub mod context;
pub mod envelope;
pub mod error;
pub mod http;
pub mod layers;
pub mod prelude;
pub mod types;

pub use context::{attach_identity, CallerIdentity, RequestContext, LOGIN_HEADER};
pub use envelope::ApiResponse;
pub use error::HttpError;
pub use layers::{default_cors, default_trace, init_tracing};
pub use types::{ApiResult, EnvelopeResult};
