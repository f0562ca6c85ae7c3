use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::{
        StatusResponse,
        users::{CreateUserRequest, UserList},
    },
    error::AppResult,
    extract::ApiJson,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = ApiResponse<StatusResponse>),
        (status = 400, description = "Missing name, email or country"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> AppResult<Json<ApiResponse<StatusResponse>>> {
    payload.validate()?;
    let user = state.users.create_user(payload).await?;
    tracing::debug!(user_id = %user.id, "user registered");
    Ok(Json(ApiResponse::success(
        "User created",
        StatusResponse::success(),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let items = state.users.list_users().await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("Users", UserList { items }, Some(meta))))
}
