//! 日志基础设施

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化 tracing 订阅者
    ///
    /// `RUST_LOG` 优先于配置中的级别。
    pub fn init(config: &LoggingConfig) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
        {
            // 已有全局订阅者（例如测试中），沿用已有的
            debug!("Logger already initialized: {}", e);
        }
    }
}
