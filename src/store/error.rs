use thiserror::Error;

/// Why a fetch from the trade store failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("trade store is not configured")]
    NotConfigured,

    #[error("request to trade store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trade store returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed trade document {document}: {reason}")]
    Decode { document: String, reason: String },

    #[error("could not read trade file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid trade file: {0}")]
    Json(#[from] serde_json::Error),
}
