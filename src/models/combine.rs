use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CombineInput {
    pub files: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct CombineOutput {
    pub output_path: PathBuf,
    pub combined_files: usize,
    pub total_size: usize,
}
