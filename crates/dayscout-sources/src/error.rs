use thiserror::Error;

/// Errors raised while decoding source payloads.
///
/// Normalization itself never fails; only the JSON boundary can.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
