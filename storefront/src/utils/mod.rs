//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - business time zone helpers
//! - [`validation`] - config field validation

pub mod logger;
pub mod time;
pub mod validation;

pub use logger::init_logger_with_file;
