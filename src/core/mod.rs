//! 核心层：错误处理、中间件、通用响应结构

pub mod error;
pub mod middleware;
pub mod response;
