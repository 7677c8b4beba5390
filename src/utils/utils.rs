use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use pathdiff::diff_paths;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 互動模式與 CLI 模式可能各自呼叫一次，重複初始化時沿用既有 logger
    if env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .is_err()
    {
        log::debug!("logger 已初始化，略過");
    }
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, count: u64, action: &str) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!("{}：{} 檔案，速度：{:.0} 檔案/秒", action, count, speed));
        self.pb.set_position(count);
    }

    /// 輸出一行進度訊息到標準輸出；有進度條時先暫停繪製再輸出
    pub fn println(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_line(&mut stdout, line) {
            log::warn!("無法輸出進度訊息：{}", e);
        }
    }

    pub fn write_line<W: Write>(&self, out: &mut W, line: &str) -> io::Result<()> {
        if self.no_progress {
            writeln!(out, "{}", line)
        } else {
            self.pb.suspend(|| writeln!(out, "{}", line))
        }
    }

    pub fn finish(&self, file_count: u64, total_size: Option<usize>) {
        if self.no_progress {
            return;
        }
        let msg = match total_size {
            Some(size) => format!("完成，共 {} 個檔案，總大小：{}", file_count, format_file_size(size)),
            None => format!("完成，共 {} 個檔案", file_count),
        };
        self.pb.finish_with_message(msg);
    }
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 以 base 為基準計算顯示用的相對路徑，無法計算時回退為原始路徑
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let relative = base.and_then(|base| {
        let absolute = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
        diff_paths(&absolute, base)
    });
    match relative {
        Some(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}
