use std::io;
use crate::config::ports::AppConfig;
use crate::models::combine::CombineOutput;

// Facade 接口，負責協調收集與合併流程
pub trait CombineFacadeTrait: Send + Sync {
    /// 依配置執行一次合併
    /// # 參數
    /// - config: 選擇內容、副檔名與進度選項
    /// # 回傳
    /// - 成功時返回合併結果；選擇無效、資料夾內無有效檔案或 IO 失敗時返回錯誤
    fn execute_combine(&self, config: AppConfig) -> io::Result<CombineOutput>;
}
