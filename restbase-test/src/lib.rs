//! In-process HTTP test client for restbase routers.
//!
//! Dispatches through `tower::ServiceExt::oneshot`, so no TCP port is bound
//! and tests stay fast and isolated.

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use restbase_core::http::{Body, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an axum `Router`.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Create a `TestApp` from an assembled `axum::Router`.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Start building a GET request.
    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    /// Start building a POST request.
    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    /// Start building a PUT request.
    pub fn put(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::PUT, path)
    }

    /// Start building a DELETE request.
    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::DELETE, path)
    }

    /// Start building a request with an arbitrary HTTP method.
    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, method, path)
    }
}

/// Builder for constructing and sending a test HTTP request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        self.headers.insert(name, value.as_ref().parse().unwrap());
        self
    }

    /// Set the request body as JSON. Also sets Content-Type to
    /// `application/json`.
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(body).unwrap());
        self.headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        self
    }

    /// Set a raw request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> TestResponse {
        let body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };

        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(body).unwrap();

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response wrapper with status assertions and body helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Assert status is 200 OK.
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    /// Assert status is 401 Unauthorized.
    pub fn assert_unauthorized(self) -> Self {
        self.assert_status(StatusCode::UNAUTHORIZED)
    }

    /// Assert status is 404 Not Found.
    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the response has a specific status code.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected {expected}, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert that a dot-separated JSON path resolves to the expected value.
    ///
    /// Supports object fields, `[idx]` array indices and a trailing `len()`:
    ///
    /// ```ignore
    /// resp.assert_json_path("data.items[0].title", "first")
    ///     .assert_json_path("data.items.len()", 2);
    /// ```
    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\" assertion failed\n  Body: {root}",
        );
        self
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("failed to deserialize body: {e}\nBody: {}", self.text())
        })
    }

    /// The body as text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a response header value by name.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Resolve a dot-separated path (`data.items[1].id`, trailing `len()`)
/// against a JSON value. Missing segments resolve to `Value::Null`.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        if segment == "len()" {
            let len = match &current {
                Value::Array(a) => a.len(),
                Value::Object(o) => o.len(),
                Value::String(s) => s.len(),
                other => panic!("len() applied to non-collection: {other}"),
            };
            current = Value::from(len);
            continue;
        }
        let (field, indices) = match segment.find('[') {
            Some(pos) => (&segment[..pos], &segment[pos..]),
            None => (segment, ""),
        };
        if !field.is_empty() {
            current = current.get(field).cloned().unwrap_or(Value::Null);
        }
        for index in indices
            .split(['[', ']'])
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<usize>().expect("non-numeric array index"))
        {
            current = current.get(index).cloned().unwrap_or(Value::Null);
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_fields_indices_and_len() {
        let root = json!({ "data": { "items": [{ "id": 7 }], "total": 1 } });
        assert_eq!(resolve_path(&root, "data.items[0].id"), json!(7));
        assert_eq!(resolve_path(&root, "data.items.len()"), json!(1));
        assert_eq!(resolve_path(&root, "data.missing"), Value::Null);
    }
}
