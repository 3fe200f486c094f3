//! 用户接口处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};
use validator::Validate;

use super::{
    model::{CreateUserResponse, UpdateUserResponse, UserRequest, UserResponse},
    repository::RepoError,
};
use crate::{app::AppState, core::error::ApiError};

type PathId = Result<Path<i32>, PathRejection>;
type UserPayload = Result<Json<UserRequest>, JsonRejection>;

/// 解析并校验请求体
fn user_request(payload: UserPayload) -> Result<UserRequest, ApiError> {
    let Json(req) = payload?;
    req.validate()?;
    Ok(req)
}

// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: UserPayload,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let req = user_request(payload)?;

    let id = state.users.create_user(&req.name, &req.dob).await?;
    info!(user_id = id, "created user");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            id,
            name: req.name,
            dob: req.dob,
        }),
    ))
}

// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    id: PathId,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;

    let user = state.users.get_user_by_id(id).await?;
    Ok(Json(user.into()))
}

// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    id: PathId,
    payload: UserPayload,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let Path(id) = id?;
    let req = user_request(payload)?;

    // 更新路径不区分“不存在”和存储错误，都返回 500，只有 GET 会给出 404
    let user = state
        .users
        .update_user(id, &req.name, &req.dob)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => {
                error!(user_id = id, "update of missing user");
                ApiError::Internal("internal server error".to_string())
            }
            other => other.into(),
        })?;
    info!(user_id = user.id, "updated user");

    Ok(Json(user.into()))
}

// DELETE /users/:id
pub async fn delete_user(State(state): State<AppState>, id: PathId) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    state.users.delete_user(id).await?;
    info!(user_id = id, "deleted user");

    Ok(StatusCode::NO_CONTENT)
}
