use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { dest, zip } = cmd {
        let produced = BackupLogic::backup(&cfg.logfile, dest, *zip)?;
        success(format!("Backup created: {}", produced.display()));
    }

    Ok(())
}
