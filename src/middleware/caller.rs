use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the caller, taken from the `X-User-Id` header.
///
/// The value is trusted as given; nothing here authenticates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub Uuid);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::BadRequest("Missing X-User-Id header".into()))?;

        let value = header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid X-User-Id header".into()))?;

        let user_id = Uuid::parse_str(value.trim())
            .map_err(|_| AppError::BadRequest("X-User-Id must be a UUID".into()))?;

        Ok(CallerId(user_id))
    }
}
