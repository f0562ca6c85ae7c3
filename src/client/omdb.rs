use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::{ClientResult, MovieClient, MovieClientError};
use crate::{
    config::OmdbConfig,
    dto::movies::{GetMovieDetailsRequest, SearchMovieRequest},
    models::{MovieDetails, SearchMovieResponse},
};

/// [`MovieClient`] backed by an OMDb-compatible HTTP API.
///
/// The HTTP client is owned by the instance, so tests and callers can hand in
/// whatever transport configuration they need.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &OmdbConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("movie-cart-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(http, &config.base_url, &config.api_key))
    }

    fn search_params(&self, request: &SearchMovieRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apikey", self.api_key.clone()),
            ("s", request.search_text.clone()),
        ];
        push_optional(&mut params, "t", request.title.as_deref());
        push_optional(&mut params, "y", request.year.as_deref());
        push_optional(&mut params, "type", request.movie_type.as_deref());
        push_optional(&mut params, "page", request.page.as_deref());
        params
    }

    fn details_params(&self, request: &GetMovieDetailsRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![("apikey", self.api_key.clone())];
        push_optional(&mut params, "i", request.movie_id.as_deref());
        push_optional(&mut params, "t", request.title.as_deref());
        push_optional(&mut params, "y", request.year.as_deref());
        push_optional(&mut params, "type", request.movie_type.as_deref());
        params
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&'static str, String)],
    ) -> ClientResult<T> {
        let url = Url::parse_with_params(&self.base_url, params).inspect_err(|err| {
            warn!(base_url = %self.base_url, error = %err, "invalid upstream base url");
        })?;
        debug!(path = url.path(), "sending upstream request");

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "upstream request failed"))?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "upstream response received");

        serde_json::from_slice(&body).map_err(|err| {
            warn!(status = %status, error = %err, "upstream body did not decode");
            MovieClientError::Decode(err)
        })
    }
}

fn push_optional(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

#[async_trait]
impl MovieClient for OmdbClient {
    async fn search_movies(
        &self,
        request: &SearchMovieRequest,
    ) -> ClientResult<SearchMovieResponse> {
        info!(search_text = %request.search_text, "searching movies");
        let response: SearchMovieResponse = self.get_json(&self.search_params(request)).await?;
        info!(hits = response.search.len(), "movie search finished");
        Ok(response)
    }

    async fn get_movie_details(
        &self,
        request: &GetMovieDetailsRequest,
    ) -> ClientResult<MovieDetails> {
        info!(?request, "fetching movie details");
        self.get_json(&self.details_params(request)).await
    }

    async fn get_movie_details_by_id(&self, movie_id: &str) -> ClientResult<MovieDetails> {
        info!(movie_id, "fetching movie details by id");
        let params = [
            ("apikey", self.api_key.clone()),
            ("i", movie_id.to_string()),
        ];
        self.get_json(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        OmdbClient::new(Client::new(), "http://localhost/", "secret")
    }

    #[test]
    fn search_params_skip_blank_filters() {
        let request = SearchMovieRequest {
            search_text: "Inception".into(),
            title: Some(String::new()),
            movie_type: Some("movie".into()),
            year: None,
            page: Some("2".into()),
        };

        let params = client().search_params(&request);

        assert_eq!(
            params,
            vec![
                ("apikey", "secret".to_string()),
                ("s", "Inception".to_string()),
                ("type", "movie".to_string()),
                ("page", "2".to_string()),
            ]
        );
    }

    #[test]
    fn details_params_only_carry_present_fields() {
        let request = GetMovieDetailsRequest {
            title: Some("Inception".into()),
            year: Some("2010".into()),
            ..Default::default()
        };

        let params = client().details_params(&request);

        assert_eq!(
            params,
            vec![
                ("apikey", "secret".to_string()),
                ("t", "Inception".to_string()),
                ("y", "2010".to_string()),
            ]
        );
    }
}
