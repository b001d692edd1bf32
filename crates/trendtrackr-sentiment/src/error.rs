use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The fetch collaborator failed before the pipeline received any items.
    #[error("no items to process: {0}")]
    NoItems(#[from] FetchError),

    #[error("malformed timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },
}

/// Errors returned by a [`crate::sources::TextSource`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The payload document could not be read.
    #[error("failed to read payload {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload did not match the expected upstream schema.
    #[error("JSON deserialization error for {context}: {source}")]
    Schema {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream API reported an error in its response body.
    #[error("upstream error: {0}")]
    Upstream(String),
}
