use std::io;
use std::path::PathBuf;
use crate::config::config::DEFAULT_OUTPUT_EXTENSION;

/// 使用者選擇的來源：單一資料夾或一組檔案
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionMode {
    Folder(Option<PathBuf>),
    Files(Vec<PathBuf>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRequest {
    pub mode: SelectionMode,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionDecision {
    CollectFolder { root: PathBuf, output: PathBuf },
    CombineFiles { files: Vec<PathBuf>, output: PathBuf },
    Reject(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    NoFolderSelected,
    NoFilesSelected,
    NoOutputPath,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::NoFolderSelected => "未選擇資料夾，請選擇一個資料夾！",
            RejectReason::NoFilesSelected => "未選擇檔案，請至少選擇一個檔案！",
            RejectReason::NoOutputPath => "未提供輸出檔案，請輸入輸出檔案名稱！",
        }
    }
}

impl From<RejectReason> for io::Error {
    fn from(reason: RejectReason) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, reason.message())
    }
}

impl SelectionRequest {
    /// 依選擇內容決定要執行的動作，不做任何檔案系統存取
    pub fn decide(&self) -> SelectionDecision {
        let source = match &self.mode {
            SelectionMode::Folder(folder) => match folder.as_ref().filter(|p| !p.as_os_str().is_empty()) {
                Some(root) => Source::Folder(root.clone()),
                None => return SelectionDecision::Reject(RejectReason::NoFolderSelected),
            },
            SelectionMode::Files(files) => {
                let files: Vec<PathBuf> = files
                    .iter()
                    .filter(|p| !p.as_os_str().is_empty())
                    .cloned()
                    .collect();
                if files.is_empty() {
                    return SelectionDecision::Reject(RejectReason::NoFilesSelected);
                }
                Source::Files(files)
            }
        };

        let output = match self.output.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(output) => with_default_extension(output.clone()),
            None => return SelectionDecision::Reject(RejectReason::NoOutputPath),
        };

        match source {
            Source::Folder(root) => SelectionDecision::CollectFolder { root, output },
            Source::Files(files) => SelectionDecision::CombineFiles { files, output },
        }
    }
}

enum Source {
    Folder(PathBuf),
    Files(Vec<PathBuf>),
}

pub fn with_default_extension(mut output: PathBuf) -> PathBuf {
    if output.extension().is_none() {
        output.set_extension(DEFAULT_OUTPUT_EXTENSION);
    }
    output
}
