use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use log::{info, warn};
use walkdir::WalkDir;
use crate::config::config::{matches_extension, EXCLUDED_DIR_NAME, EXCLUDED_FILE_NAME};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;

/// 檔案服務，負責資料夾模式下的檔案收集
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput> {
        validate_directory(&input.root)?;
        let (files, skipped_dirs) = walk_files(&input.root, Some(EXCLUDED_DIR_NAME));
        let files: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| is_collectable(path, &input.extensions))
            .collect();
        info!(
            "收集完成：{}，共 {} 個檔案，略過 {} 個 {} 目錄",
            input.root.display(),
            files.len(),
            skipped_dirs,
            EXCLUDED_DIR_NAME
        );
        Ok(FileCollectOutput { files, skipped_dirs })
    }
}

pub fn validate_directory(root: &Path) -> io::Result<()> {
    if !root.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("資料夾 '{}' 不存在", root.display()),
        ));
    }
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' 不是資料夾", root.display()),
        ));
    }
    Ok(())
}

pub fn is_collectable(path: &Path, extensions: &[String]) -> bool {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    file_name != EXCLUDED_FILE_NAME && matches_extension(&file_name, extensions)
}

/// 深度優先走訪 root 底下的所有檔案。
///
/// 同一層先列出檔案、再依序進入子目錄，兩者各自保持檔案系統列舉順序。
/// 名稱為 `excluded_dir` 的子目錄不會被進入（root 本身除外），回傳略過的目錄數。
/// 不跟隨符號連結；指向檔案的連結仍視為檔案。無法讀取的項目記錄警告後略過。
pub fn walk_files(root: &Path, excluded_dir: Option<&str>) -> (Vec<PathBuf>, u64) {
    let mut files = Vec::new();
    let mut skipped_dirs = 0;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
        .into_iter()
        .filter_entry(|entry| {
            let excluded = entry.depth() > 0
                && entry.file_type().is_dir()
                && excluded_dir.is_some_and(|name| entry.file_name() == name);
            if excluded {
                skipped_dirs += 1;
            }
            !excluded
        });

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!("走訪時無法讀取項目，已略過：{}", e),
        }
    }
    (files, skipped_dirs)
}

pub fn read_file_content(file_path: &Path) -> io::Result<(Vec<u8>, usize)> {
    let mut file = File::open(file_path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let file_size = buffer.len();
    Ok((buffer, file_size))
}

/// 以 UTF-8 解碼，無效的位元組序列直接丟棄
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
