use actix_web::{http::StatusCode, ResponseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] mongodb::error::Error),

    // Document came back without an _id
    #[error("Storage didn't return an id for the new expense")]
    MissingId,

    #[error("Invalid price {0:?}: expected a whole number from 0 to {max}", max = crate::form::MAX_PRICE)]
    InvalidPrice(String),

    #[error("Unknown payee {0:?}")]
    UnknownParty(String),

    #[error("The expense needs a description")]
    EmptyProduct,

    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl TrackerError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidPrice(_)
                | TrackerError::UnknownParty(_)
                | TrackerError::EmptyProduct
                | TrackerError::InvalidDate(_)
        )
    }
}

impl ResponseError for TrackerError {
    fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
