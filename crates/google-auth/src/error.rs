use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid service account key: {0}")]
    InvalidKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to sign assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token endpoint error {status}: {body}")]
    Api { status: u16, body: String },
}
