use serde_json::Value;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Dns,
    Tls,
    Other,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failures (no HTTP response).
    #[error("transport failure ({kind:?}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },
    /// Non-2xx HTTP response with its parsed JSON body.
    #[error("upstream returned status {status}")]
    Api { status: u16, body: Value },
    /// Body that could not be parsed or did not fit the expected shape.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}
