use std::fmt;
use std::error::Error as StdError;

#[derive(Debug)]
pub struct CatalogError {
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl CatalogError {
    pub fn new(message: &str) -> Self {
        CatalogError {
            message: message.to_string(),
            source: None,
        }
    }

    /// The underlying error, if this one wraps another.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogError: {}", self.message)
    }
}

// Any std error converts, so `?` works on reqwest, serde_json, io and url errors alike.
impl<E: StdError + Send + Sync + 'static> From<E> for CatalogError {
    fn from(err: E) -> Self {
        CatalogError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
