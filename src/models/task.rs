use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged work entry. Field order matches the CSV layout:
/// Date, Title, Time, Notes. `Time` is plain minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD" in the log file
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Time")]
    pub minutes: u32,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl Task {
    pub fn new(date: NaiveDate, title: impl Into<String>, minutes: u32, notes: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            minutes,
            notes: notes.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
