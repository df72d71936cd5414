use ansi_term::Colour;

use crate::models::Task;
use crate::utils::formatting::mins2readable;

/// Print one task as a detail card, as shown while paging through results.
pub fn show_task(task: &Task, date_format: &str) {
    println!("{} {}", Colour::Cyan.bold().paint("Date: "), task.date.format(date_format));
    println!("{} {}", Colour::Cyan.bold().paint("Title:"), task.title);
    println!(
        "{} {} ({} min)",
        Colour::Cyan.bold().paint("Time: "),
        mins2readable(task.minutes),
        task.minutes
    );
    println!("{} {}", Colour::Cyan.bold().paint("Notes:"), task.notes);
}
