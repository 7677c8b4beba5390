use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use file_combiner::config::config::default_collector_extensions;
use file_combiner::config::ports::AppConfig;
use file_combiner::facade::combine_facade::CombineFacade;
use file_combiner::facade::traits::i_combine::CombineFacadeTrait;
use file_combiner::models::selection::{SelectionMode, SelectionRequest};
use file_combiner::utils::utils::display_path;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config(mode: SelectionMode, output: &Path) -> AppConfig {
    AppConfig {
        selection: SelectionRequest { mode, output: Some(output.to_path_buf()) },
        extensions: default_collector_extensions(),
        no_progress: true,
        log_level: "info".to_string(),
    }
}

fn headers(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix("File: "))
        .map(str::to_string)
        .collect()
}

#[test]
fn folder_mode_excludes_cache_and_lock_file() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let root = src.path();
    write(&root.join("package.json"), "{}");
    write(&root.join("package-lock.json"), "{\"lock\": true}");
    write(&root.join("node_modules/left-pad/index.js"), "module.exports = 1;");
    write(&root.join("web/node_modules/react/index.js"), "react");
    write(&root.join("web/src/App.tsx"), "export const App = () => null;");
    write(&root.join("web/logo.png"), "not really a png");
    let output_path = out.path().join("combined.txt");

    let output = CombineFacade::default()
        .execute_combine(config(SelectionMode::Folder(Some(root.to_path_buf())), &output_path))
        .unwrap();
    assert_eq!(output.combined_files, 2);

    let text = fs::read_to_string(&output_path).unwrap();
    let found = headers(&text);
    assert_eq!(found.len(), 2);
    assert!(found[0].ends_with("package.json"));
    assert!(found[1].ends_with("App.tsx"));
    assert!(!text.contains("node_modules"));
    assert!(!text.contains("package-lock.json"));
}

#[test]
fn files_mode_output_has_two_separators_per_file_in_order() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let files: Vec<PathBuf> = vec![
        src.path().join("z.py"),
        src.path().join("a.css"),
        src.path().join("m.sh"),
    ];
    write(&files[0], "print('z')\n");
    write(&files[1], "body { margin: 0; }");
    write(&files[2], "echo m\n");
    let output_path = out.path().join("bundle.txt");

    CombineFacade::default()
        .execute_combine(config(SelectionMode::Files(files.clone()), &output_path))
        .unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    let separator = "-".repeat(50);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.iter().filter(|l| **l == separator).count(), 2 * files.len());

    let cwd = std::env::current_dir().ok();
    let expected: Vec<String> = files.iter().map(|f| display_path(f, cwd.as_deref())).collect();
    assert_eq!(headers(&text), expected);

    for (file, header) in files.iter().zip(&expected) {
        let block = format!("File: {}\n{}\n{}\n{}\n", header, separator, fs::read_to_string(file).unwrap(), separator);
        assert!(text.contains(&block), "missing block for {}", header);
    }
}

#[test]
fn output_without_extension_gets_txt() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = src.path().join("readme.md");
    write(&file, "# hi");

    let output = CombineFacade::default()
        .execute_combine(config(SelectionMode::Files(vec![file]), &out.path().join("combined")))
        .unwrap();
    assert_eq!(output.output_path, out.path().join("combined.txt"));
    assert!(output.output_path.exists());
}

#[test]
fn empty_selection_leaves_no_output_file() {
    let out = tempdir().unwrap();
    let output_path = out.path().join("combined.txt");

    let err = CombineFacade::default()
        .execute_combine(config(SelectionMode::Files(Vec::new()), &output_path))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(!output_path.exists());
}

#[test]
fn folder_without_matches_leaves_no_output_file() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write(&src.path().join("node_modules/x/index.js"), "x");
    write(&src.path().join("binary.bin"), "x");
    let output_path = out.path().join("combined.txt");

    let err = CombineFacade::default()
        .execute_combine(config(SelectionMode::Folder(Some(src.path().to_path_buf())), &output_path))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(!output_path.exists());
}

#[test]
fn missing_folder_is_not_found() {
    let out = tempdir().unwrap();
    let err = CombineFacade::default()
        .execute_combine(config(
            SelectionMode::Folder(Some(out.path().join("missing"))),
            &out.path().join("combined.txt"),
        ))
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
