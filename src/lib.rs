//! # 用户服务
//!
//! 一个基于 Axum + SQLx 的用户增删改查服务：
//! - 用户表只有 id、姓名、出生日期三列，年龄在读取时计算
//! - 请求 ID 与请求日志中间件
//! - TOML + 环境变量配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
