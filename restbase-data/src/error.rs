use restbase_core::HttpError;

/// Errors that can occur in the data layer.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    Backend(Box<dyn std::error::Error + Send + Sync>),
    Other(String),
}

impl DataError {
    /// Construct a `Backend` variant from any error type.
    ///
    /// Used by repository implementations to wrap driver-specific errors.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Backend(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Backend(err) => write!(f, "Backend error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Backend(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// Backend faults surface to clients as a generic failure; no recovery or
// retry happens at this layer.
impl From<DataError> for HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => HttpError::NotFound(msg),
            DataError::Backend(e) => HttpError::Internal(e.to_string()),
            DataError::Other(msg) => HttpError::Internal(msg),
        }
    }
}
