use clap::{Parser, ValueEnum};
use std::io;

/// 資料夾模式下允許合併的副檔名
pub const COLLECTOR_EXTENSIONS: &[&str] = &[
    ".js", ".tsx", ".ts", ".txt", ".json", ".css", ".html", ".md", ".py", ".sh", ".yml", ".xml",
    ".yaml", ".mdx", ".tsconfig", ".gitignore", ".env", ".jsonc",
];

/// 行號移除工具預設處理的副檔名（與 COLLECTOR_EXTENSIONS 互相獨立）
pub const STRIP_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".py", ".json", ".css", ".html",
];

/// 資料夾模式下整個略過的依賴快取目錄
pub const EXCLUDED_DIR_NAME: &str = "node_modules";

/// 無論副檔名為何都排除的鎖定檔
pub const EXCLUDED_FILE_NAME: &str = "package-lock.json";

pub const SEPARATOR_WIDTH: usize = 50;

pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "file_combiner",
    about = "將多個文字檔案或整個資料夾合併為單一輸出檔案",
    long_about = "將選取的檔案（或資料夾內符合副檔名的檔案）依序寫入單一文字檔，每個檔案前加上 `File: <路徑>` 標題與分隔線。\n不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要合併的檔案；資料夾模式下為單一資料夾
    pub inputs: Vec<String>,
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "strip_line_numbers",
    about = "移除程式碼檔案每行開頭的行號（格式：數字|）",
    long_about = "處理單一檔案（忽略副檔名篩選），或遞迴處理目錄下所有符合副檔名的檔案，原地移除每行開頭的 `數字|` 前綴。\n注意：預設為原地覆寫，寫入中途中斷可能損毀檔案；使用 --atomic 改為先寫入暫存檔再取代。"
)]
pub struct StripCli {
    /// 要處理的檔案或目錄路徑
    pub path: String,
    #[arg(long, num_args = 0.., default_values_t = default_strip_extensions())]
    pub extensions: Vec<String>,
    #[arg(long, default_value_t = false)]
    pub atomic: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Debug)]
pub enum Mode {
    Folder,
    Files,
}

pub fn default_collector_extensions() -> Vec<String> {
    COLLECTOR_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

pub fn default_strip_extensions() -> Vec<String> {
    STRIP_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// 副檔名只做後綴比對，不可為空也不可包含路徑分隔字元
pub fn is_valid_extension(extension: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|', '*'];
    !extension.is_empty() && !extension.contains(&invalid_chars[..])
}

pub fn validate_extensions(extensions: &[String]) -> io::Result<()> {
    for extension in extensions {
        if !is_valid_extension(extension) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的副檔名: '{}'", extension)));
        }
    }
    Ok(())
}

pub fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_lists_stay_independent() {
        assert!(COLLECTOR_EXTENSIONS.contains(&".md"));
        assert!(!STRIP_EXTENSIONS.contains(&".md"));
        assert!(STRIP_EXTENSIONS.contains(&".jsx"));
        assert!(!COLLECTOR_EXTENSIONS.contains(&".jsx"));
        assert_eq!(COLLECTOR_EXTENSIONS.len(), 18);
        assert_eq!(STRIP_EXTENSIONS.len(), 8);
    }

    #[test]
    fn extension_match_is_plain_suffix() {
        let exts = default_collector_extensions();
        assert!(matches_extension("app.tsx", &exts));
        assert!(matches_extension(".gitignore", &exts));
        assert!(matches_extension("settings.jsonc", &exts));
        assert!(!matches_extension("main.rs", &exts));
        assert!(!matches_extension("archive.json.bak", &exts));
    }

    #[test]
    fn rejects_empty_or_path_like_extensions() {
        assert!(validate_extensions(&[".ts".to_string(), "log".to_string()]).is_ok());
        let err = validate_extensions(&["".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(validate_extensions(&["src/.ts".to_string()]).is_err());
    }

    #[test]
    fn strip_cli_defaults_and_explicit_extensions() {
        let cli = StripCli::try_parse_from(["strip_line_numbers", "src"]).unwrap();
        assert_eq!(cli.path, "src");
        assert_eq!(cli.extensions, default_strip_extensions());
        assert!(!cli.atomic);

        let cli = StripCli::try_parse_from(["strip_line_numbers", "src", "--extensions", ".log", ".txt"]).unwrap();
        assert_eq!(cli.extensions, vec![".log".to_string(), ".txt".to_string()]);
    }
}
