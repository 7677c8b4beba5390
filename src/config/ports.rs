use std::io;
use crate::models::combine::CombineOutput;
use crate::models::selection::SelectionRequest;

// 合併流程的完整配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub selection: SelectionRequest,
    pub extensions: Vec<String>,
    pub no_progress: bool,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 合併執行的 Port
pub trait CombinePort {
    fn execute(&self, config: AppConfig) -> io::Result<CombineOutput>;
}
