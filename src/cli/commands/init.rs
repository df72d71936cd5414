use std::path::Path;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::TaskStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty log file with the CSV header
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.clone(), cli.test)?;

    println!("⚙️  Initializing worklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗒️  Log file    : {}", cfg.logfile);

    let log_path = Path::new(&cfg.logfile);
    if !log_path.exists() {
        TaskStore::new(log_path).save()?;
        println!("✅ Log file created at {}", cfg.logfile);
    }

    success("worklog initialization completed!");
    Ok(())
}
