use std::io;
use crate::models::combine::{CombineInput, CombineOutput};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::strip::{StripInput, StripOutput};

// File 服務接口，負責從資料夾收集檔案
pub trait FileServiceTrait: Send + Sync {
    /// 遞迴收集資料夾內符合副檔名的檔案
    /// # 參數
    /// - input: 根目錄與允許的副檔名
    /// # 回傳
    /// - 成功時返回依走訪順序排列的檔案列表，根目錄不存在或不是目錄時返回錯誤
    fn collect_files(&self, input: FileCollectInput) -> io::Result<FileCollectOutput>;
}

// Combine 服務接口，負責將多個檔案寫入單一輸出檔
pub trait CombineServiceTrait: Send + Sync {
    /// 依序合併檔案
    /// # 參數
    /// - input: 檔案列表與輸出路徑
    /// # 回傳
    /// - 成功時返回輸出路徑與統計，任一檔案讀取失敗即中止並返回錯誤
    fn combine_files(&self, input: CombineInput) -> io::Result<CombineOutput>;
}

// Strip 服務接口，負責移除行號前綴
pub trait StripServiceTrait: Send + Sync {
    /// 處理單一檔案或整個目錄
    /// # 參數
    /// - input: 目標路徑、副檔名與寫入模式
    /// # 回傳
    /// - 每個檔案的處理結果；路徑不存在時返回 NotFound 錯誤
    fn strip(&self, input: StripInput) -> io::Result<StripOutput>;
}
