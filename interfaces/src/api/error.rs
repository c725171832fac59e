#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-success status. Holds the status code, the server's `error` field,
    /// the optional `details` field and the requested url.
    #[error("Server error status={0}, message={1}, url={3}")]
    ServerError(u16, String, Option<String>, String),

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
