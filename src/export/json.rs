use crate::errors::AppResult;
use crate::models::Task;

/// Write the tasks as pretty-printed JSON.
pub fn write_json(path: &str, tasks: &[Task]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    std::fs::write(path, json)?;
    Ok(())
}
