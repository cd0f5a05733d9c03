use std::sync::Arc;

use shared::{BusinessConfig, ConfigResult};

use crate::core::Config;
use crate::status::SystemClock;
use crate::store;

/// 应用状态 - 持有不可变的业务配置
///
/// Cloning is cheap: the business config sits behind an `Arc` and is never
/// mutated after [`AppState::initialize`].
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub business: Arc<BusinessConfig>,
}

impl AppState {
    /// Load and validate the business config named by `config`
    pub fn initialize(config: &Config) -> ConfigResult<Self> {
        let business = store::load_from_path(&config.store_config_path)?;
        Ok(Self::with_business(config.clone(), business))
    }

    pub fn with_business(config: Config, business: BusinessConfig) -> Self {
        Self {
            config,
            business: Arc::new(business),
        }
    }

    /// Wall clock in the configured business zone
    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.config.timezone)
    }
}
