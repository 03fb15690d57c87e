use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read event store: {0}")]
    Io(#[from] io::Error),
    #[error("malformed event store: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` is not a YYYY-MM-DD date")]
    InvalidDateKey(String),
}
