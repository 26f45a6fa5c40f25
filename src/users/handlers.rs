use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    extractors::{ValidJson, ValidPath, ValidQuery},
    state::AppState,
    users::{
        dto::{
            CreateUserRequest, DeleteUserResponse, Pagination, UpdateUserRequest, UserResponse,
        },
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = services::create_user(state.users.as_ref(), payload).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    ValidQuery(p): ValidQuery<Pagination>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = services::list_users(state.users.as_ref(), p.skip, p.limit).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = services::get_user(state.users.as_ref(), id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = services::update_user(state.users.as_ref(), id, payload).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    services::delete_user(state.users.as_ref(), id).await?;
    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".into(),
    }))
}
