use axum::{
    Json, Router,
    extract::State,
    routing::post,
};

use crate::{
    dto::{
        StatusResponse,
        movies::{
            AddMovieToCartRequest, CartList, GetMovieDetailsRequest, MovieList,
            SearchMovieRequest,
        },
    },
    error::AppResult,
    extract::ApiJson,
    middleware::caller::CallerId,
    models::MovieDetails,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(get_movie_details))
        .route("/search", post(search_movies))
        .route("/cart", post(add_movie_to_cart).get(get_movies_in_cart))
}

#[utoipa::path(
    post,
    path = "/movies/search",
    request_body = SearchMovieRequest,
    responses(
        (status = 200, description = "Movies matching the search", body = ApiResponse<MovieList>),
        (status = 400, description = "Missing searchText or malformed body"),
        (status = 500, description = "Upstream or lookup failure"),
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SearchMovieRequest>,
) -> AppResult<Json<ApiResponse<MovieList>>> {
    payload.validate()?;
    let items = state.movies.search_movies(payload).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success(
        "Movies",
        MovieList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = GetMovieDetailsRequest,
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieDetails>),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Upstream or lookup failure"),
    ),
    tag = "Movies"
)]
pub async fn get_movie_details(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<GetMovieDetailsRequest>,
) -> AppResult<Json<ApiResponse<MovieDetails>>> {
    let details = state.movies.get_movie_details(payload).await?;
    Ok(Json(ApiResponse::success("Movie details", details, None)))
}

#[utoipa::path(
    post,
    path = "/movies/cart",
    request_body = AddMovieToCartRequest,
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "Caller user id")
    ),
    responses(
        (status = 200, description = "Movie added to cart", body = ApiResponse<StatusResponse>),
        (status = 400, description = "Missing movieId or X-User-Id"),
        (status = 500, description = "Lookup failure or movie already in cart"),
    ),
    tag = "Cart"
)]
pub async fn add_movie_to_cart(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
    ApiJson(payload): ApiJson<AddMovieToCartRequest>,
) -> AppResult<Json<ApiResponse<StatusResponse>>> {
    payload.validate()?;
    state.movies.add_movie_to_cart(user_id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Added to cart",
        StatusResponse::success(),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/movies/cart",
    params(
        ("x-user-id" = uuid::Uuid, Header, description = "Caller user id")
    ),
    responses(
        (status = 200, description = "Movies in the caller's cart, unordered", body = ApiResponse<CartList>),
        (status = 400, description = "Missing X-User-Id"),
    ),
    tag = "Cart"
)]
pub async fn get_movies_in_cart(
    State(state): State<AppState>,
    CallerId(user_id): CallerId,
) -> AppResult<Json<ApiResponse<CartList>>> {
    let items = state.movies.get_movies_in_cart(user_id).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("OK", CartList { items }, Some(meta))))
}
