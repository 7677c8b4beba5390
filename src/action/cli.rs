use std::io;
use std::path::{Path, PathBuf};
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{default_collector_extensions, Cli, Mode};
use crate::config::ports::{AppConfig, CombinePort, ConfigPort};
use crate::facade::combine_facade::CombineFacade;
use crate::models::combine::CombineOutput;
use crate::models::selection::{SelectionMode, SelectionRequest};
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<CombineOutput> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<CombineOutput> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;

    let combine_port: Box<dyn CombinePort> = Box::new(CombineFacade::default());
    let output = combine_port.execute(config.clone())?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(output)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }

    // 未指定 --mode 時：單一輸入且為既有目錄視為資料夾模式
    fn resolve_mode(&self) -> Mode {
        match self.cli.mode {
            Some(mode) => mode,
            None if self.cli.inputs.len() == 1 && Path::new(&self.cli.inputs[0]).is_dir() => Mode::Folder,
            None => Mode::Files,
        }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let mode = match self.resolve_mode() {
            Mode::Folder => {
                if self.cli.inputs.len() > 1 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("資料夾模式只接受一個路徑，收到 {} 個", self.cli.inputs.len()),
                    ));
                }
                SelectionMode::Folder(self.cli.inputs.first().map(PathBuf::from))
            }
            Mode::Files => SelectionMode::Files(self.cli.inputs.iter().map(PathBuf::from).collect()),
        };

        Ok(AppConfig {
            selection: SelectionRequest {
                mode,
                output: self.cli.output.as_ref().map(PathBuf::from),
            },
            extensions: self.cli.extensions.clone().unwrap_or_else(default_collector_extensions),
            no_progress: self.cli.no_progress,
            log_level: self.cli.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn adapter(args: &[&str]) -> CliConfigAdapter {
        let mut argv = vec!["file_combiner"];
        argv.extend_from_slice(args);
        CliConfigAdapter::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn single_directory_input_means_folder_mode() {
        let dir = tempdir().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let config = adapter(&[&root, "-o", "out.txt"]).get_config().unwrap();
        assert_eq!(config.selection.mode, SelectionMode::Folder(Some(PathBuf::from(&root))));
        assert_eq!(config.extensions, default_collector_extensions());
    }

    #[test]
    fn several_inputs_mean_files_mode_in_order() {
        let config = adapter(&["b.ts", "a.ts", "-o", "out.txt", "--extensions", ".ts,.md"])
            .get_config()
            .unwrap();
        assert_eq!(
            config.selection.mode,
            SelectionMode::Files(vec![PathBuf::from("b.ts"), PathBuf::from("a.ts")])
        );
        assert_eq!(config.extensions, vec![".ts".to_string(), ".md".to_string()]);
    }

    #[test]
    fn folder_mode_rejects_multiple_inputs() {
        let err = adapter(&["--mode", "folder", "a", "b", "-o", "out.txt"])
            .get_config()
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_output_is_left_to_selection() {
        let config = adapter(&["a.ts"]).get_config().unwrap();
        assert_eq!(config.selection.output, None);
    }
}
