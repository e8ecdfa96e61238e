use crate::storage::StorageError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::responses::LeadResponse;
use thiserror::Error;

/// Every way a lead submission can fail.
///
/// `Display` carries internal detail for the logs; callers only ever see
/// `public_message`.
#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Rate limit exceeded for {0}")]
    RateLimited(String),

    #[error("Missing name or phone")]
    MissingRequired,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl LeadError {
    pub fn public_message(&self) -> &'static str {
        match self {
            LeadError::InvalidBody(_) => "Invalid request body.",
            LeadError::RateLimited(_) => "Too many submissions. Please try again later.",
            LeadError::MissingRequired => "Name and phone are required.",
            LeadError::Storage(_) | LeadError::Blocking(_) => "Failed to save lead",
        }
    }
}

impl ResponseError for LeadError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeadError::InvalidBody(_) | LeadError::MissingRequired => StatusCode::BAD_REQUEST,
            LeadError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            LeadError::Storage(_) | LeadError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(LeadResponse::failure(self.public_message()))
    }
}
