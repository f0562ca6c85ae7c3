use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{CartEntry, Movie},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchMovieRequest {
    pub search_text: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: Option<String>,
    pub year: Option<String>,
    /// Opaque page token forwarded upstream as-is.
    pub page: Option<String>,
}

impl SearchMovieRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.search_text.trim().is_empty() {
            return Err(AppError::BadRequest("searchText is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMovieDetailsRequest {
    pub movie_id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieToCartRequest {
    pub movie_id: String,
}

impl AddMovieToCartRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.movie_id.trim().is_empty() {
            return Err(AppError::BadRequest("movieId is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MovieList {
    #[schema(value_type = Vec<Movie>)]
    pub items: Vec<Movie>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartList {
    #[schema(value_type = Vec<CartEntry>)]
    pub items: Vec<CartEntry>,
}
