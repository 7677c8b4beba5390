use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use log::{error, info};
use crate::config::config::SEPARATOR_WIDTH;
use crate::models::combine::{CombineInput, CombineOutput};
use crate::service::file::{decode_text, read_file_content};
use crate::service::traits::i_service::CombineServiceTrait;
use crate::utils::utils::{display_path, ProgressManager};

/// 合併服務，將檔案依序寫成 `File:` 標題、分隔線、內容、分隔線的區塊
pub struct CombineService;

impl CombineService {
    pub fn new() -> Self {
        CombineService
    }
}

impl Default for CombineService {
    fn default() -> Self {
        Self::new()
    }
}

impl CombineServiceTrait for CombineService {
    fn combine_files(&self, input: CombineInput) -> io::Result<CombineOutput> {
        if input.files.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "沒有要合併的檔案"));
        }

        let output_file = File::create(&input.output_path).map_err(|e| {
            error!("無法建立輸出檔案 {}：{}", input.output_path.display(), e);
            with_path(e, "無法建立輸出檔案", &input.output_path)
        })?;
        let mut writer = BufWriter::new(output_file);
        let base = std::env::current_dir().ok();
        let pm = ProgressManager::new(input.files.len() as u64, input.no_progress);

        let mut total_size = 0;
        for (index, file_path) in input.files.iter().enumerate() {
            let (data, file_size) = read_file_content(file_path).map_err(|e| {
                error!("讀取檔案失敗，中止合併：{}：{}", file_path.display(), e);
                with_path(e, "無法讀取檔案", file_path)
            })?;
            let header = display_path(file_path, base.as_deref());
            write_block(&mut writer, &header, &decode_text(&data))
                .map_err(|e| with_path(e, "無法寫入輸出檔案", &input.output_path))?;
            total_size += file_size;
            pm.update(index as u64 + 1, "合併中");
        }
        writer
            .flush()
            .map_err(|e| with_path(e, "無法寫入輸出檔案", &input.output_path))?;

        pm.finish(input.files.len() as u64, Some(total_size));
        info!(
            "合併完成：{} 個檔案寫入 {}，來源總大小 {} 位元組",
            input.files.len(),
            input.output_path.display(),
            total_size
        );
        Ok(CombineOutput {
            output_path: input.output_path,
            combined_files: input.files.len(),
            total_size,
        })
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// 寫入單一檔案區塊；內容後固定補一個換行再接分隔線
pub fn write_block<W: Write>(writer: &mut W, display_path: &str, content: &str) -> io::Result<()> {
    let separator = separator();
    writeln!(writer, "File: {}", display_path)?;
    writeln!(writer, "{}", separator)?;
    writer.write_all(content.as_bytes())?;
    write!(writer, "\n{}\n", separator)
}

fn with_path(e: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{} '{}'：{}", action, path.display(), e))
}
