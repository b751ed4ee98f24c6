use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;
use crate::utils::time;

/// 服务器状态 - 持有所有请求共享的资源
///
/// 克隆成本极低 (配置 + 连接池句柄)，每个请求都会拿到一份副本。
/// 没有任何进程内可变状态：所有持久化都经过 [`DbService`]。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 打开数据库、执行迁移并构造状态
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 连接池引用 (repository 函数的参数)
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// 业务时区下的"今天"
    pub fn today(&self) -> NaiveDate {
        time::today(self.config.business_timezone)
    }

    /// 关闭连接池
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
