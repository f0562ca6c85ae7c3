use std::sync::Arc;

use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::{
    client::MovieClient,
    dto::movies::{AddMovieToCartRequest, GetMovieDetailsRequest, SearchMovieRequest},
    models::{CartEntry, Movie, MovieDetails},
    store::CartStore,
};

/// Orchestrates upstream lookups and cart persistence.
#[derive(Clone)]
pub struct MovieService {
    client: Arc<dyn MovieClient>,
    cart: Arc<dyn CartStore>,
}

impl MovieService {
    pub fn new(client: Arc<dyn MovieClient>, cart: Arc<dyn CartStore>) -> Self {
        Self { client, cart }
    }

    pub async fn search_movies(&self, request: SearchMovieRequest) -> ServiceResult<Vec<Movie>> {
        let response = self.client.search_movies(&request).await?;
        check_upstream_error(&response.error)?;
        Ok(response.search)
    }

    pub async fn get_movie_details(
        &self,
        request: GetMovieDetailsRequest,
    ) -> ServiceResult<MovieDetails> {
        let details = self.client.get_movie_details(&request).await?;
        check_upstream_error(&details.error)?;
        Ok(details)
    }

    /// Looks the movie up, then stores it in the user's cart.
    ///
    /// The lookup has no side effect, so a failure at either step leaves
    /// nothing behind. Concurrent adds of the same movie are settled by the
    /// store's unique constraint, surfacing as `StoreError::DuplicateEntry`.
    pub async fn add_movie_to_cart(
        &self,
        user_id: Uuid,
        request: AddMovieToCartRequest,
    ) -> ServiceResult<()> {
        let details = self
            .client
            .get_movie_details_by_id(&request.movie_id)
            .await?;
        check_upstream_error(&details.error)?;

        self.cart
            .add_to_cart(&details, user_id)
            .await
            .inspect_err(|err| tracing::warn!(%user_id, error = %err, "add to cart failed"))?;
        Ok(())
    }

    pub async fn get_movies_in_cart(&self, user_id: Uuid) -> ServiceResult<Vec<CartEntry>> {
        Ok(self.cart.list_cart(user_id).await?)
    }
}

fn check_upstream_error(error: &str) -> ServiceResult<()> {
    if error.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Business(error.to_string()))
    }
}
