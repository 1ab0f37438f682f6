#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unsupported visibility value: {0}")]
    InvalidVisibility(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
