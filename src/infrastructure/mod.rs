//! 基础设施层：数据库连接、查询、日志

pub mod database;
pub mod logger;
pub mod queries;
