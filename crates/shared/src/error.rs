use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate function id '{0}' in catalog")]
    DuplicateFunction(String),
    #[error("duplicate category id '{0}' in catalog")]
    DuplicateCategory(String),
}
