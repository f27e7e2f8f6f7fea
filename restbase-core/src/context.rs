use crate::http::extract::{FromRequestParts, Request};
use crate::http::middleware::Next;
use crate::http::response::Response;
use axum::http::request::Parts;
use std::convert::Infallible;

/// Header carrying the caller login, populated by an upstream auth layer.
pub const LOGIN_HEADER: &str = "x-login";

/// Caller identity as established by whatever sits in front of this layer.
///
/// Stored as a request extension; restbase reads it, never verifies it.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub String);

/// Per-request context handed to every controller operation.
///
/// Carries the optional caller login for reuse in messages, audit fields or
/// custom fetchers. Extraction is infallible — an anonymous request simply
/// has `login: None`.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub login: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { login: None }
    }

    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let login = parts
            .extensions
            .get::<CallerIdentity>()
            .map(|identity| identity.0.clone());
        Ok(Self { login })
    }
}

/// Middleware that lifts the [`LOGIN_HEADER`] value into a [`CallerIdentity`]
/// extension. Stands in for a real auth filter in demos and tests; install
/// with `axum::middleware::from_fn(attach_identity)`.
pub async fn attach_identity(mut request: Request, next: Next) -> Response {
    let login = request
        .headers()
        .get(LOGIN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(login) = login {
        request.extensions_mut().insert(CallerIdentity(login));
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_defaults_to_anonymous() {
        assert!(RequestContext::default().login.is_none());
        assert_eq!(
            RequestContext::with_login("alice").login.as_deref(),
            Some("alice")
        );
    }
}
