//! Storefront - landing page core for a delivery-only burger shop
//!
//! # 架构概述
//!
//! Three independent pure components, all leaves over one immutable
//! [`shared::BusinessConfig`]:
//!
//! - **Schedule Evaluator** (`schedule`): open/closed + today's hours label
//! - **Link Builder** (`links`): percent-encoded messaging deep links
//! - **Address Formatter** (`address`): display lines, single line, map URL
//!
//! Around them, the host runtime:
//!
//! - **Config loading** (`store`): JSON business config + validation
//! - **Status refresh** (`status`): cancellable once-a-minute re-evaluation
//! - **Page view** (`page`): text rendering of the landing page
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、状态、后台任务
//! ├── utils/         # 日志、时区、校验
//! ├── schedule.rs    # Schedule Evaluator
//! ├── links.rs       # Link Builder
//! ├── address.rs     # Address Formatter
//! ├── store.rs       # Business config loader
//! ├── status.rs      # Status refresher
//! └── page.rs        # Landing page view
//! ```

pub mod address;
pub mod core;
pub mod links;
pub mod page;
pub mod schedule;
pub mod status;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{AppState, BackgroundTasks, Config, TaskKind};
pub use page::{LandingPage, LandingView};
pub use schedule::{StoreStatus, is_open, today_hours_label};
pub use status::{Clock, StatusHandle, StatusRefresher, SystemClock};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置环境 (.env, 配置, 日志)
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
        config.is_production(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
   _____ __                 ____                 __
  / ___// /_____  ________ / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/
    "#
    );
}
