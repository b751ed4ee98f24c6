//! Reserva Server - 餐厅预约后端
//!
//! # 架构概述
//!
//! 客户 (`clientes`) 和预约 (`reservas`) 的 CRUD HTTP 服务：
//!
//! - **HTTP API** (`api`): RESTful 接口 + 三个前端页面
//! - **数据库** (`db`): SQLite 连接池、迁移和 repository 函数
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! reserva-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # HTTP 服务 (router + middleware)
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、时间、输入校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use services::{HttpService, build_app};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并初始化日志
///
/// 必须在 [`Config::from_env`] 之前调用，这样 `.env` 中的变量才能生效。
pub fn setup_environment() -> Result<(), ServerError> {
    match dotenvy::dotenv() {
        Ok(path) => eprintln!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Failed to load .env: {e}"),
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   ______ _
  / /_/ / _ \/ ___/ _ \/ ___/ | / / __ `/
 / _, _/  __(__  )  __/ /   | |/ / /_/ /
/_/ |_|\___/____/\___/_/    |___/\__,_/
    "#
    );
}
