use crate::errors::AppResult;
use crate::models::Task;
use crate::store::CSV_HEADER;
use csv::WriterBuilder;

/// Write the tasks as CSV with the standard log-file header.
pub fn write_csv(path: &str, tasks: &[Task]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(CSV_HEADER)?;
    for task in tasks {
        wtr.serialize(task)?;
    }

    wtr.flush()?;
    Ok(())
}
