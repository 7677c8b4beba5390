use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use log::{info, warn};
use regex::bytes::Regex;
use tempfile::NamedTempFile;
use crate::config::config::matches_extension;
use crate::models::strip::{StripFileResult, StripInput, StripOutcome, StripOutput, WriteMode};
use crate::service::file::walk_files;
use crate::service::traits::i_service::StripServiceTrait;
use crate::utils::utils::ProgressManager;

/// 行首的「數字 + |」前綴
pub const LINE_PREFIX_PATTERN: &str = r"^\d+\|";

/// 行號移除服務
pub struct StripService {
    pattern: Regex,
}

impl StripService {
    pub fn new() -> Self {
        StripService {
            pattern: Regex::new(LINE_PREFIX_PATTERN).expect("行號前綴的正規表示式無效"),
        }
    }

    /// 移除每一行開頭的行號前綴，每行最多移除一次；內容未變時回傳 Borrowed
    pub fn strip_content<'a>(&self, content: &'a [u8]) -> Cow<'a, [u8]> {
        if !content.split_inclusive(|&b| b == b'\n').any(|line| self.pattern.is_match(line)) {
            return Cow::Borrowed(content);
        }
        let mut stripped = Vec::with_capacity(content.len());
        for line in content.split_inclusive(|&b| b == b'\n') {
            match self.pattern.find(line) {
                Some(prefix) => stripped.extend_from_slice(&line[prefix.end()..]),
                None => stripped.extend_from_slice(line),
            }
        }
        Cow::Owned(stripped)
    }

    /// 處理單一檔案，回傳是否有改寫
    pub fn strip_file(&self, path: &Path, write_mode: WriteMode) -> io::Result<bool> {
        let content = fs::read(path)?;
        match self.strip_content(&content) {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(stripped) => {
                write_back(path, &stripped, write_mode)?;
                Ok(true)
            }
        }
    }

    fn strip_directory(&self, input: &StripInput) -> StripOutput {
        let (files, _) = walk_files(&input.path, None);
        let targets: Vec<_> = files
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| matches_extension(&name.to_string_lossy(), &input.extensions))
                    .unwrap_or(false)
            })
            .collect();

        let pm = ProgressManager::new(targets.len() as u64, input.no_progress);
        let mut output = StripOutput::default();
        for (index, path) in targets.into_iter().enumerate() {
            pm.println(&format!("處理中：{}", path.display()));
            let outcome = match self.strip_file(&path, input.write_mode) {
                Ok(true) => StripOutcome::Modified,
                Ok(false) => StripOutcome::Unchanged,
                Err(e) => {
                    warn!("處理失敗，繼續下一個檔案：{}：{}", path.display(), e);
                    StripOutcome::Failed(e.to_string())
                }
            };
            output.results.push(StripFileResult { path, outcome });
            pm.update(index as u64 + 1, "移除行號");
        }
        pm.finish(output.results.len() as u64, None);
        output
    }
}

impl Default for StripService {
    fn default() -> Self {
        Self::new()
    }
}

impl StripServiceTrait for StripService {
    fn strip(&self, input: StripInput) -> io::Result<StripOutput> {
        if input.path.is_file() {
            // 明確指定的檔案不受副檔名篩選限制
            info!("處理單一檔案：{}", input.path.display());
            let outcome = match self.strip_file(&input.path, input.write_mode) {
                Ok(true) => StripOutcome::Modified,
                Ok(false) => StripOutcome::Unchanged,
                Err(e) => {
                    return Err(io::Error::new(
                        e.kind(),
                        format!("無法處理檔案 '{}'：{}", input.path.display(), e),
                    ))
                }
            };
            Ok(StripOutput {
                results: vec![StripFileResult { path: input.path, outcome }],
            })
        } else if input.path.is_dir() {
            info!("處理目錄：{}，副檔名：{:?}", input.path.display(), input.extensions);
            Ok(self.strip_directory(&input))
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("提供的路徑既不是檔案也不是目錄：{}", input.path.display()),
            ))
        }
    }
}

/// InPlace 直接覆寫，寫入中斷可能留下不完整的檔案；Atomic 先寫暫存檔再 rename
fn write_back(path: &Path, data: &[u8], write_mode: WriteMode) -> io::Result<()> {
    match write_mode {
        WriteMode::InPlace => fs::write(path, data),
        WriteMode::Atomic => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let permissions = fs::metadata(path)?.permissions();
            let mut temp = NamedTempFile::new_in(dir)?;
            temp.write_all(data)?;
            temp.as_file().sync_all()?;
            fs::set_permissions(temp.path(), permissions)?;
            temp.persist(path).map_err(|e| e.error)?;
            Ok(())
        }
    }
}
