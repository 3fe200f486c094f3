//! 应用层：路由和处理器

pub mod health;
pub mod users;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::{request_id_middleware, request_logging_middleware};
use crate::infrastructure::queries::UserQueries;
use users::repository::UserRepository;

/// 处理器共享的状态，所有依赖在入口处显式构造后传入
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
}

impl AppState {
    pub fn new(queries: Arc<dyn UserQueries>) -> Self {
        Self {
            users: UserRepository::new(queries),
        }
    }
}

/// 组装完整的路由和中间件
///
/// 中间件从外到内：请求 ID -> tracing span -> 请求日志 -> 处理器
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
