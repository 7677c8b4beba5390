use dialoguer::{Confirm, Input};
use std::io;
use std::path::PathBuf;

use crate::config::config::default_collector_extensions;
use crate::config::ports::{AppConfig, CombinePort, ConfigPort};
use crate::facade::combine_facade::CombineFacade;
use crate::models::combine::CombineOutput;
use crate::models::selection::{SelectionMode, SelectionRequest};
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

pub fn process_interactive_mode() -> io::Result<CombineOutput> {
    println!("=== 檔案與資料夾合併工具 ===");
    setup_logging("info")?;

    let config_service = ConfigService::new(Box::new(InteractiveConfigAdapter::new()));
    let config = config_service.get_config()?;

    let combine_port: Box<dyn CombinePort> = Box::new(CombineFacade::default());
    combine_port.execute(config)
}

pub fn get_folder_mode_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否改為選擇資料夾，而非個別檔案？")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("模式選擇失敗: {}", e)))
}

pub fn get_folder_path() -> io::Result<Option<PathBuf>> {
    let folder: String = Input::<String>::new()
        .with_prompt("請輸入要合併的資料夾路徑")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("資料夾路徑輸入失敗: {}", e)))?;
    let folder = folder.trim();
    Ok(if folder.is_empty() { None } else { Some(PathBuf::from(folder)) })
}

pub fn get_file_paths() -> io::Result<Vec<PathBuf>> {
    let files: String = Input::<String>::new()
        .with_prompt("請輸入要合併的檔案路徑（以逗號分隔，依輸入順序合併）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("檔案路徑輸入失敗: {}", e)))?;
    Ok(split_paths(&files))
}

pub fn get_output_path() -> io::Result<Option<PathBuf>> {
    let output: String = Input::<String>::new()
        .with_prompt("請輸入輸出檔案路徑（未指定副檔名時使用 .txt）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出路徑輸入失敗: {}", e)))?;
    let output = output.trim();
    Ok(if output.is_empty() { None } else { Some(PathBuf::from(output)) })
}

pub fn split_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

// 交互配置適配器，只負責收集使用者輸入，判斷交給 SelectionRequest::decide
pub struct InteractiveConfigAdapter;

impl InteractiveConfigAdapter {
    pub fn new() -> Self {
        InteractiveConfigAdapter
    }
}

impl Default for InteractiveConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let mode = if get_folder_mode_option()? {
            SelectionMode::Folder(get_folder_path()?)
        } else {
            SelectionMode::Files(get_file_paths()?)
        };
        let output = get_output_path()?;

        Ok(AppConfig {
            selection: SelectionRequest { mode, output },
            extensions: default_collector_extensions(),
            no_progress: false,
            log_level: "info".to_string(),
        })
    }
}
