//! Persistence for cart entries and users.

use std::fmt::Display;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    dto::users::CreateUserRequest,
    models::{CartEntry, MovieDetails, User},
};

pub mod cart_store;
pub mod user_store;

pub use cart_store::PgCartStore;
pub use user_store::PgUserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violation; carries a caller-facing description.
    #[error("{0}")]
    DuplicateEntry(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database error: {0}")]
    Orm(#[from] sea_orm::DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Inserts one entry. A second insert for the same user and movie fails
    /// with [`StoreError::DuplicateEntry`].
    async fn add_to_cart(&self, details: &MovieDetails, user_id: Uuid) -> StoreResult<()>;

    /// All entries for `user_id`, in no particular order.
    async fn list_cart(&self, user_id: Uuid) -> StoreResult<Vec<CartEntry>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, request: CreateUserRequest) -> StoreResult<User>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;
}

/// Decodes every row it can and drops the rest.
///
/// Listings are best-effort: a row that no longer matches the expected shape
/// is logged and skipped instead of failing the whole listing, so callers
/// cannot treat a listing as complete.
pub(crate) fn collect_decoded<R, T, E, F>(rows: Vec<R>, table: &str, decode: F) -> Vec<T>
where
    F: Fn(&R) -> Result<T, E>,
    E: Display,
{
    let total = rows.len();
    let decoded: Vec<T> = rows
        .iter()
        .filter_map(|row| match decode(row) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(table, error = %err, "skipping row that failed to decode");
                None
            }
        })
        .collect();
    if decoded.len() < total {
        tracing::warn!(table, total, kept = decoded.len(), "listing is incomplete");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_decoded_skips_bad_rows() {
        let rows = vec!["1", "two", "3"];

        let values = collect_decoded(rows, "numbers", |row| row.parse::<i32>());

        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn collect_decoded_of_nothing_is_empty() {
        let values = collect_decoded(Vec::<&str>::new(), "numbers", |row| row.parse::<i32>());

        assert!(values.is_empty());
    }
}
