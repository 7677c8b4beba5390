use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WriteMode {
    /// 直接截斷並覆寫原檔案
    InPlace,
    /// 先寫入同目錄暫存檔，再以 rename 取代原檔案
    Atomic,
}

#[derive(Clone, Debug)]
pub struct StripInput {
    pub path: PathBuf,
    pub extensions: Vec<String>,
    pub write_mode: WriteMode,
    pub no_progress: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StripOutcome {
    Modified,
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StripFileResult {
    pub path: PathBuf,
    pub outcome: StripOutcome,
}

#[derive(Debug, Default)]
pub struct StripOutput {
    pub results: Vec<StripFileResult>,
}

impl StripOutput {
    pub fn modified(&self) -> usize {
        self.count(|o| *o == StripOutcome::Modified)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == StripOutcome::Unchanged)
    }

    pub fn failures(&self) -> Vec<&StripFileResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, StripOutcome::Failed(_)))
            .collect()
    }

    fn count(&self, pred: impl Fn(&StripOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}
