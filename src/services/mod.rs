use thiserror::Error;

use crate::{client::MovieClientError, store::StoreError};

pub mod movie_service;
pub mod user_service;

pub use movie_service::MovieService;
pub use user_service::UserService;

/// Failure of a service operation.
///
/// Client and store failures pass through untouched; only the upstream's
/// embedded error field is translated, into [`ServiceError::Business`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Client(#[from] MovieClientError),

    #[error("{0}")]
    Business(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn is_duplicate_entry(&self) -> bool {
        matches!(self, ServiceError::Store(StoreError::DuplicateEntry(_)))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
