pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge data JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid edge config: {message}")]
    InvalidConfig { message: String },
}
