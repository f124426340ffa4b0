use thiserror::Error;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
