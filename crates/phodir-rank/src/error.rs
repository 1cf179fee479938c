use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("invalid input collection: expected a JSON array of listings, found {found}")]
    InvalidInput { found: &'static str },

    #[error("invalid listing {listing}: {reason}")]
    InvalidListing { listing: String, reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {path}: {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
