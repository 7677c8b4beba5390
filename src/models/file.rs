use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FileCollectInput {
    pub root: PathBuf,
    pub extensions: Vec<String>,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub skipped_dirs: u64,
}
