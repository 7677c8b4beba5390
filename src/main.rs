use std::process;

use file_combiner::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，共合併 {} 個檔案", output.combined_files);
            println!("檔案已成功合併至：{}", output.output_path.display());
        }
        Err(e) => {
            eprintln!("發生錯誤：{}", e);
            process::exit(1);
        }
    }
}
