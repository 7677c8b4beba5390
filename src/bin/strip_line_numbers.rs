use std::process;

use file_combiner::action::strip::process_strip_args;

fn main() {
    match process_strip_args() {
        Ok(output) => println!(
            "完成：{} 個檔案已移除行號，{} 個檔案無需變更",
            output.modified(),
            output.unchanged()
        ),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
