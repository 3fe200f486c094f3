//! 用户请求与响应模型
//!
//! 每个接口都有自己的响应结构，字段在编译期确定。

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{repository::DOB_FORMAT, service::calculate_age};
use crate::infrastructure::queries::User;

/// 创建和更新共用的请求体，两个字段都必填
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "dob is required"))]
    pub dob: String,
}

/// POST /users 的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
}

/// GET /users 与 GET /users/:id 的响应，带计算出的年龄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
    pub age: i32,
}

/// PUT /users/:id 的响应，不含 age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            age: calculate_age(user.dob),
            dob: user.dob.format(DOB_FORMAT).to_string(),
            name: user.name,
        }
    }
}

impl From<User> for UpdateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            dob: user.dob.format(DOB_FORMAT).to_string(),
            name: user.name,
        }
    }
}
