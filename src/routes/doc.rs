use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        StatusResponse,
        movies::{AddMovieToCartRequest, CartList, GetMovieDetailsRequest, MovieList, SearchMovieRequest},
        users::{CreateUserRequest, UserList},
    },
    models::{CartEntry, Movie, MovieDetails, Rating, User},
    response::{ApiResponse, Meta},
    routes::{health, movies, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        movies::search_movies,
        movies::get_movie_details,
        movies::add_movie_to_cart,
        movies::get_movies_in_cart,
        users::create_user,
        users::list_users
    ),
    components(
        schemas(
            Movie,
            MovieDetails,
            Rating,
            CartEntry,
            User,
            SearchMovieRequest,
            GetMovieDetailsRequest,
            AddMovieToCartRequest,
            CreateUserRequest,
            StatusResponse,
            MovieList,
            CartList,
            UserList,
            Meta,
            ApiResponse<MovieDetails>,
            ApiResponse<MovieList>,
            ApiResponse<CartList>,
            ApiResponse<UserList>,
            ApiResponse<StatusResponse>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Movies", description = "Movie search and detail lookup"),
        (name = "Cart", description = "Per-user movie cart"),
        (name = "Users", description = "User registry"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
