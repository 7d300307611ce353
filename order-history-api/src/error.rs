use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderHistoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for OrderHistoryError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        OrderHistoryError::StoreError(error)
    }
}

pub type OrderHistoryResult<T> = Result<T, OrderHistoryError>;
