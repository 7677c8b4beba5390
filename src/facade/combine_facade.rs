use std::io;
use log::{info, warn};
use crate::config::ports::{AppConfig, CombinePort};
use crate::facade::traits::i_combine::CombineFacadeTrait;
use crate::models::combine::{CombineInput, CombineOutput};
use crate::models::file::FileCollectInput;
use crate::models::selection::SelectionDecision;
use crate::service::combine::CombineService;
use crate::service::file::FileService;
use crate::service::traits::i_service::{CombineServiceTrait, FileServiceTrait};

pub struct CombineFacade {
    file_service: Box<dyn FileServiceTrait>,
    combine_service: Box<dyn CombineServiceTrait>,
}

impl CombineFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        combine_service: Box<dyn CombineServiceTrait>,
    ) -> Self {
        CombineFacade {
            file_service,
            combine_service,
        }
    }
}

impl Default for CombineFacade {
    fn default() -> Self {
        Self::new(Box::new(FileService::new()), Box::new(CombineService::new()))
    }
}

impl CombineFacadeTrait for CombineFacade {
    fn execute_combine(&self, config: AppConfig) -> io::Result<CombineOutput> {
        let (files, output_path) = match config.selection.decide() {
            SelectionDecision::Reject(reason) => {
                warn!("{}", reason.message());
                return Err(reason.into());
            }
            SelectionDecision::CollectFolder { root, output } => {
                info!("資料夾模式，來源：{}，輸出：{}", root.display(), output.display());
                let collected = self.file_service.collect_files(FileCollectInput {
                    root: root.clone(),
                    extensions: config.extensions.clone(),
                })?;
                if collected.files.is_empty() {
                    warn!("資料夾 {} 中沒有有效檔案", root.display());
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("所選資料夾 '{}' 中找不到有效檔案！", root.display()),
                    ));
                }
                (collected.files, output)
            }
            SelectionDecision::CombineFiles { files, output } => {
                info!("檔案模式，共 {} 個檔案，輸出：{}", files.len(), output.display());
                (files, output)
            }
        };

        self.combine_service.combine_files(CombineInput {
            files,
            output_path,
            no_progress: config.no_progress,
        })
    }
}

// 讓 Facade 也能作為 CombinePort 使用
impl CombinePort for CombineFacade {
    fn execute(&self, config: AppConfig) -> io::Result<CombineOutput> {
        self.execute_combine(config)
    }
}
