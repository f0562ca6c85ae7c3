use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One hit of an upstream search. Field names follow the upstream payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct Movie {
    pub title: String,
    pub year: String,
    #[serde(rename = "imdbID", alias = "ImdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub movie_type: String,
    pub poster: String,
}

/// Upstream search envelope. `error` is set when upstream reports a business
/// failure such as "Movie not found!" inside an otherwise successful reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SearchMovieResponse {
    #[serde(rename = "Search")]
    pub search: Vec<Movie>,
    #[serde(rename = "totalResults")]
    pub total_results: String,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Full upstream detail record, including the embedded `Response`/`Error` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", alias = "ImdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub movie_type: String,
    #[serde(rename = "DVD")]
    pub dvd: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
    pub response: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub user_id: Uuid,
    pub movie_id: String,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub actors: String,
    pub movie_type: String,
    pub poster: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
