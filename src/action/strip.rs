use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::config::{validate_extensions, StripCli};
use crate::models::strip::{StripInput, StripOutput, WriteMode};
use crate::service::strip::StripService;
use crate::service::traits::i_service::StripServiceTrait;
use crate::utils::utils::setup_logging;

pub fn process_strip_args() -> io::Result<StripOutput> {
    let cli = StripCli::parse();
    setup_logging(&cli.log_level)?;
    run_strip(&cli)
}

pub fn run_strip(cli: &StripCli) -> io::Result<StripOutput> {
    run_strip_with(cli, &StripService::new())
}

pub fn run_strip_with(cli: &StripCli, service: &dyn StripServiceTrait) -> io::Result<StripOutput> {
    validate_extensions(&cli.extensions)?;
    let output = service.strip(strip_input(cli))?;

    let failures = output.failures();
    if !failures.is_empty() {
        for failure in &failures {
            log::error!("處理失敗：{} ({:?})", failure.path.display(), failure.outcome);
        }
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} 個檔案處理失敗，其餘 {} 個已完成", failures.len(), output.results.len() - failures.len()),
        ));
    }
    Ok(output)
}

pub fn strip_input(cli: &StripCli) -> StripInput {
    StripInput {
        path: PathBuf::from(&cli.path),
        extensions: cli.extensions.clone(),
        write_mode: if cli.atomic { WriteMode::Atomic } else { WriteMode::InPlace },
        no_progress: cli.no_progress,
    }
}
