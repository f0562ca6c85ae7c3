use movie_cart_api::{
    client::{MovieClient, MovieClientError, OmdbClient},
    dto::movies::{GetMovieDetailsRequest, SearchMovieRequest},
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn client_for(base_url: &str) -> OmdbClient {
    OmdbClient::new(reqwest::Client::new(), base_url, API_KEY)
}

fn search(text: &str) -> SearchMovieRequest {
    SearchMovieRequest {
        search_text: text.to_string(),
        title: None,
        movie_type: None,
        year: None,
        page: None,
    }
}

#[tokio::test]
async fn search_sends_query_and_decodes_hits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("s", "Inception"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": [{ "Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "N/A" }],
            "totalResults": "1",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .search_movies(&search("Inception"))
        .await
        .unwrap();

    assert_eq!(response.search.len(), 1);
    assert_eq!(response.search[0].title, "Inception");
    assert_eq!(response.search[0].imdb_id, "tt1375666");
    assert_eq!(response.total_results, "1");
    assert!(response.error.is_empty());
}

#[tokio::test]
async fn search_forwards_only_present_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "Alien"))
        .and(query_param("type", "movie"))
        .and(query_param("page", "3"))
        .and(query_param_is_missing("t"))
        .and(query_param_is_missing("y"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "Search": [], "Response": "True" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchMovieRequest {
        movie_type: Some("movie".into()),
        page: Some("3".into()),
        year: Some(String::new()),
        ..search("Alien")
    };
    let response = client_for(&server.uri())
        .search_movies(&request)
        .await
        .unwrap();

    assert!(response.search.is_empty());
}

#[tokio::test]
async fn embedded_error_is_returned_in_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let response = client_for(&server.uri())
        .search_movies(&search("zzzz"))
        .await
        .unwrap();

    assert!(response.search.is_empty());
    assert_eq!(response.response, "False");
    assert_eq!(response.error, "Movie not found!");
}

#[tokio::test]
async fn error_status_with_json_body_still_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Response": "False",
            "Error": "Invalid API key!"
        })))
        .mount(&server)
        .await;

    let details = client_for(&server.uri())
        .get_movie_details_by_id("tt1375666")
        .await
        .unwrap();

    assert_eq!(details.error, "Invalid API key!");
}

#[tokio::test]
async fn details_by_id_uses_i_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("apikey", API_KEY))
        .and(query_param("i", "tt1375666"))
        .and(query_param_is_missing("s"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Ratings": [{ "Source": "Internet Movie Database", "Value": "8.8/10" }],
            "imdbRating": "8.8",
            "ImdbID": "tt1375666",
            "Type": "movie",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server.uri())
        .get_movie_details_by_id("tt1375666")
        .await
        .unwrap();

    assert_eq!(details.title, "Inception");
    assert_eq!(details.imdb_id, "tt1375666");
    assert_eq!(details.imdb_rating, "8.8");
    assert_eq!(details.ratings.len(), 1);
    assert_eq!(details.ratings[0].value, "8.8/10");
    assert_eq!(details.movie_type, "movie");
}

#[tokio::test]
async fn details_by_structured_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("t", "Inception"))
        .and(query_param("y", "2010"))
        .and(query_param_is_missing("i"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Title": "Inception", "Response": "True" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = GetMovieDetailsRequest {
        title: Some("Inception".into()),
        year: Some("2010".into()),
        ..Default::default()
    };
    let details = client_for(&server.uri())
        .get_movie_details(&request)
        .await
        .unwrap();

    assert_eq!(details.title, "Inception");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .search_movies(&search("Inception"))
        .await
        .unwrap_err();

    assert!(matches!(err, MovieClientError::Decode(_)));
}

#[tokio::test]
async fn unparseable_base_url_is_malformed() {
    let err = client_for("not a url")
        .get_movie_details_by_id("tt1375666")
        .await
        .unwrap_err();

    assert!(matches!(err, MovieClientError::MalformedUrl(_)));
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&uri)
        .search_movies(&search("Inception"))
        .await
        .unwrap_err();

    assert!(matches!(err, MovieClientError::Transport(_)));
}
