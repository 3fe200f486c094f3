//! users 表的数据访问层
//!
//! 每个方法对应一条 SQL 语句，没有事务也没有重试。找不到行时返回
//! `sqlx::Error::RowNotFound`，由仓储层翻译成业务错误。

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPool;

use super::database;

/// users 表中的一行
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub dob: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
}

const CREATE_USER: &str = "INSERT INTO users (name, dob) VALUES ($1, $2) RETURNING id, name, dob";
const GET_USER_BY_ID: &str = "SELECT id, name, dob FROM users WHERE id = $1";
const LIST_USERS: &str = "SELECT id, name, dob FROM users ORDER BY id";
const UPDATE_USER: &str =
    "UPDATE users SET name = $2, dob = $3 WHERE id = $1 RETURNING id, name, dob";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

/// users 表的查询接口
#[async_trait]
pub trait UserQueries: Send + Sync {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, sqlx::Error>;

    async fn get_user_by_id(&self, id: i32) -> Result<User, sqlx::Error>;

    /// 按插入顺序返回所有行，表为空时返回空列表
    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error>;

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, sqlx::Error>;

    /// 删除不存在的 id 不算错误
    async fn delete_user(&self, id: i32) -> Result<(), sqlx::Error>;

    /// 连通性检查，供健康检查使用
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// 基于 PostgreSQL 连接池的实现
#[derive(Clone)]
pub struct PgQueries {
    pool: PgPool,
}

impl PgQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserQueries for PgQueries {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(CREATE_USER)
            .bind(params.name)
            .bind(params.dob)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(GET_USER_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(LIST_USERS)
            .fetch_all(&self.pool)
            .await
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(UPDATE_USER)
            .bind(params.id)
            .bind(params.name)
            .bind(params.dob)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_user(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query(DELETE_USER).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        database::ping(&self.pool).await
    }
}
