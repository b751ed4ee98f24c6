use chrono_tz::Tz;
use std::str::FromStr;

/// 服务器配置 - 预约服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT (或 PORT) | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | reservas.db | SQLite 数据库文件 (`:memory:` 为内存库) |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录 (按天滚动) |
/// | BUSINESS_TIMEZONE | UTC | 判断"今天"所用的时区 |
/// | MAX_PARTY_SIZE | (无) | 每个预约的最大人数 (可选) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/reservas.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库路径
    pub database_path: String,
    /// 连接池最大连接数
    pub db_max_connections: u32,
    /// 日志级别 (tracing filter)
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 业务时区
    pub business_timezone: Tz,
    /// 每个预约的最大人数，`None` 表示只要求大于零
    pub max_party_size: Option<i64>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let http_port = lookup("HTTP_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| parse_or_warn("HTTP_PORT", &p))
            .unwrap_or(3000);

        Self {
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port,
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "reservas.db".into()),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| parse_or_warn("DB_MAX_CONNECTIONS", &v))
                .filter(|n: &u32| *n > 0)
                .unwrap_or(5),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            business_timezone: lookup("BUSINESS_TIMEZONE")
                .and_then(|v| parse_or_warn("BUSINESS_TIMEZONE", &v))
                .unwrap_or(Tz::UTC),
            max_party_size: lookup("MAX_PARTY_SIZE")
                .and_then(|v| parse_or_warn("MAX_PARTY_SIZE", &v))
                .filter(|n: &i64| *n > 0),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 默认配置 + 自定义数据库路径 (不读取环境变量)
    ///
    /// 常用于测试场景 (`":memory:"`)
    pub fn with_database_path(database_path: impl Into<String>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.database_path = database_path.into();
        config
    }

    /// 是否内存数据库
    pub fn is_in_memory(&self) -> bool {
        self.database_path == ":memory:"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: '{}'", key, value);
            None
        }
    }
}
