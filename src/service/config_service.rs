use std::io;
use crate::config::config::validate_extensions;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，包裝配置來源並統一驗證
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        let config = self.config_port.get_config()?;
        validate_extensions(&config.extensions)?;
        Ok(config)
    }
}
