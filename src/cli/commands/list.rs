use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TaskStore;
use crate::ui::messages::info;
use crate::utils::mins2readable;
use crate::utils::table::Table;

/// Print every logged entry as a fixed-width table, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TaskStore::load(&cfg.logfile)?;

    if store.is_empty() {
        info("The log is empty.");
        return Ok(());
    }

    let mut table = Table::new(
        ["Date", "Title", "Time", "Notes"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    for task in store.tasks() {
        table.add_row(vec![
            task.date_str(),
            task.title.clone(),
            mins2readable(task.minutes),
            task.notes.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} entries.", store.len());

    Ok(())
}
