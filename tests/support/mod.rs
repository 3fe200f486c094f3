//! 测试辅助：内存版的 users 表

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;
use user_service::{
    infrastructure::queries::{CreateUserParams, UpdateUserParams, User, UserQueries},
    router, AppState,
};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<User>,
}

/// 行为与 PgQueries 一致的内存实现，可以模拟数据库故障
#[derive(Default)]
pub struct InMemoryQueries {
    table: Mutex<Table>,
    broken: AtomicBool,
}

impl InMemoryQueries {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 之后的所有查询都返回连接错误
    pub fn break_database(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl UserQueries for InMemoryQueries {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, sqlx::Error> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let user = User {
            id: table.next_id,
            name: params.name,
            dob: params.dob,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i32) -> Result<User, sqlx::Error> {
        self.check()?;
        let table = self.table.lock().unwrap();
        table
            .rows
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.clone())
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, sqlx::Error> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let user = table
            .rows
            .iter_mut()
            .find(|u| u.id == params.id)
            .ok_or(sqlx::Error::RowNotFound)?;
        user.name = params.name;
        user.dob = params.dob;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), sqlx::Error> {
        self.check()?;
        self.table.lock().unwrap().rows.retain(|u| u.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }
}

pub fn test_app(queries: Arc<InMemoryQueries>) -> Router {
    router(AppState::new(queries))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        body: body.to_vec(),
    }
}
