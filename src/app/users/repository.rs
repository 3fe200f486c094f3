//! 用户仓储
//!
//! 负责把 `YYYY-MM-DD` 字符串转换成日期，再调用数据访问层。
//! 每个操作只做一次数据库往返，不重试。

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::error;

use crate::core::error::ApiError;
use crate::infrastructure::queries::{CreateUserParams, UpdateUserParams, User, UserQueries};

/// 出生日期在接口边界上的格式
pub const DOB_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("invalid date of birth {0:?}, expected YYYY-MM-DD")]
    InvalidDob(String),
    #[error("user not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            other => RepoError::Database(other),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            err @ RepoError::InvalidDob(_) => ApiError::BadRequest(err.to_string()),
            RepoError::NotFound => ApiError::NotFound("user not found".to_string()),
            RepoError::Database(e) => {
                error!(error = %e, "database error");
                ApiError::Internal("internal server error".to_string())
            }
        }
    }
}

/// 解析出生日期，只接受补零的 `YYYY-MM-DD`
pub fn parse_dob(dob: &str) -> Result<NaiveDate, RepoError> {
    let bytes = dob.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(RepoError::InvalidDob(dob.to_string()));
    }

    NaiveDate::parse_from_str(dob, DOB_FORMAT).map_err(|_| RepoError::InvalidDob(dob.to_string()))
}

#[derive(Clone)]
pub struct UserRepository {
    queries: Arc<dyn UserQueries>,
}

impl UserRepository {
    pub fn new(queries: Arc<dyn UserQueries>) -> Self {
        Self { queries }
    }

    /// 插入新用户，返回数据库分配的 id
    pub async fn create_user(&self, name: &str, dob: &str) -> Result<i32, RepoError> {
        let dob = parse_dob(dob)?;
        let user = self
            .queries
            .create_user(CreateUserParams {
                name: name.to_string(),
                dob,
            })
            .await?;
        Ok(user.id)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<User, RepoError> {
        Ok(self.queries.get_user_by_id(id).await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.queries.list_users().await?)
    }

    /// 整体替换 name 和 dob
    pub async fn update_user(&self, id: i32, name: &str, dob: &str) -> Result<User, RepoError> {
        let dob = parse_dob(dob)?;
        let user = self
            .queries
            .update_user(UpdateUserParams {
                id,
                name: name.to_string(),
                dob,
            })
            .await?;
        Ok(user)
    }

    /// 硬删除；id 不存在时同样返回成功
    pub async fn delete_user(&self, id: i32) -> Result<(), RepoError> {
        Ok(self.queries.delete_user(id).await?)
    }

    pub async fn ping(&self) -> Result<(), RepoError> {
        Ok(self.queries.ping().await?)
    }
}
