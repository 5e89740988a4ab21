#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ReadError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("not found")]
    NotFound,
    #[error("malformed response: {0}")]
    Deserialization(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error("upstream failure: {0}")]
    Upstream(String),
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
