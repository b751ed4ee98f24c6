//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`pages`] - 前端页面
//! - [`clientes`] - 客户管理接口
//! - [`reservas`] - 预约管理接口
//! - [`extract`] - 请求体提取器

pub mod extract;

pub mod health;
pub mod pages;

// Data models API
pub mod clientes;
pub mod reservas;
