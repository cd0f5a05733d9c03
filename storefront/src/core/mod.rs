//! 核心模块 - 运行时配置、状态和后台任务
//!
//! # 模块结构
//!
//! - [`Config`] - 运行时配置 (环境变量)
//! - [`AppState`] - 共享状态 (业务配置 + 时区)
//! - [`BackgroundTasks`] - 后台任务管理

pub mod config;
pub mod state;
pub mod tasks;

pub use config::Config;
pub use state::AppState;
pub use tasks::{BackgroundTasks, TaskKind};
