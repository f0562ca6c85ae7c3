//! Lookup client for the upstream movie catalog.
//!
//! Upstream business failures ("Movie not found!") arrive inside a normal
//! JSON body and are left in the returned payload's `error` field. Only
//! failures to reach upstream or to read its reply become a
//! [`MovieClientError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    dto::movies::{GetMovieDetailsRequest, SearchMovieRequest},
    models::{MovieDetails, SearchMovieResponse},
};

pub mod omdb;

pub use omdb::OmdbClient;

#[derive(Debug, Error)]
pub enum MovieClientError {
    #[error("malformed upstream url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, MovieClientError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieClient: Send + Sync {
    /// Free-text search with optional title/year/type/page filters.
    async fn search_movies(
        &self,
        request: &SearchMovieRequest,
    ) -> ClientResult<SearchMovieResponse>;

    /// Detail lookup by any combination of id, title, year and type.
    async fn get_movie_details(
        &self,
        request: &GetMovieDetailsRequest,
    ) -> ClientResult<MovieDetails>;

    async fn get_movie_details_by_id(&self, movie_id: &str) -> ClientResult<MovieDetails>;
}
