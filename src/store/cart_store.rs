use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::{CartStore, StoreError, StoreResult, collect_decoded};
use crate::{
    db::DbPool,
    models::{CartEntry, MovieDetails},
};

#[derive(Clone)]
pub struct PgCartStore {
    pool: DbPool,
}

impl PgCartStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn add_to_cart(&self, details: &MovieDetails, user_id: Uuid) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies_cart (user_id, movie_id, title, year, genre, actors, movie_type, poster)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user_id)
        .bind(&details.imdb_id)
        .bind(&details.title)
        .bind(&details.year)
        .bind(&details.genre)
        .bind(&details.actors)
        .bind(&details.movie_type)
        .bind(&details.poster)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::info!(%user_id, movie_id = %details.imdb_id, "movie added to cart");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::info!(%user_id, movie_id = %details.imdb_id, "movie already in cart");
                Err(StoreError::DuplicateEntry("movie already added to the cart"))
            }
            Err(err) => {
                tracing::error!(error = %err, "cart insert failed");
                Err(err.into())
            }
        }
    }

    async fn list_cart(&self, user_id: Uuid) -> StoreResult<Vec<CartEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, movie_id, title, year, genre, actors, movie_type, poster, created_at
            FROM movies_cart
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(collect_decoded(rows, "movies_cart", |row| CartEntry::from_row(row)))
    }
}
