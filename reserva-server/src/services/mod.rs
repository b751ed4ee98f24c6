//! 服务层 - 服务器核心服务
//!
//! # 服务列表
//!
//! - [`HttpService`] - HTTP 路由与服务器

pub mod http_service;

pub use http_service::{HttpService, build_app};
