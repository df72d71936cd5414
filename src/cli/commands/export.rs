use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_tasks;
use crate::store::TaskStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, output } = cmd {
        let store = TaskStore::load(&cfg.logfile)?;
        export_tasks(format, output, store.tasks())?;
        success(format!(
            "Exported {} entries to {} ({}).",
            store.len(),
            output,
            format
        ));
    }

    Ok(())
}
