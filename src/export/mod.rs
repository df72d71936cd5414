pub mod csv;
pub mod json;

use crate::errors::{AppError, AppResult};
use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Write the tasks to `path` in the requested format.
pub fn export_tasks(format: &str, path: &str, tasks: &[Task]) -> AppResult<()> {
    match ExportFormat::from_code(format) {
        Some(ExportFormat::Csv) => csv::write_csv(path, tasks),
        Some(ExportFormat::Json) => json::write_json(path, tasks),
        None => Err(AppError::InvalidExportFormat(format.to_string())),
    }
}
