//! Interactive session: main menu, search menu and the result pager.
//!
//! This layer only renders and collects input. Every paging decision is
//! delegated to [`Browser`], every query to `core::search`, so the behavior
//! under test does not depend on a terminal.

use crate::config::Config;
use crate::core::search;
use crate::core::{Browser, BrowserAction, BrowserState};
use crate::errors::AppResult;
use crate::store::TaskStore;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::prompt::{ask_confirmation, edit_task_form, new_task_form, prompt_date, prompt_minutes, read_line};
use crate::ui::render::show_task;

/// Start the interactive session over the configured log file.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = TaskStore::load(&cfg.logfile)?;
    main_menu(&mut store, cfg);
    Ok(())
}

fn main_menu(store: &mut TaskStore, cfg: &Config) {
    loop {
        println!();
        header("WORK LOG");
        println!("a) Add new entry");
        println!("b) Search in existing entries");
        println!("c) Quit program");

        let Some(option) = read_line("\n> ") else {
            return;
        };

        match option.as_str() {
            "a" => add_entry(store, cfg),
            "b" => search_menu(store, cfg),
            "c" => return,
            _ => warning("Sorry, you must choose a valid option."),
        }
    }
}

fn add_entry(store: &mut TaskStore, cfg: &Config) {
    let Some(task) = new_task_form() else {
        info("Entry cancelled.");
        return;
    };

    store.insert_sorted(task.clone());
    save_store(store);

    println!();
    show_task(&task, &cfg.date_format);
    success("The entry has been added.");
}

fn search_menu(store: &mut TaskStore, cfg: &Config) {
    loop {
        println!();
        header("SEARCH");
        println!("a) Exact Date");
        println!("b) Range of Dates");
        println!("c) Time Spent");
        println!("d) Exact Search");
        println!("e) Regex Pattern");
        println!("f) Return to menu");

        let Some(option) = read_line("\n> ") else {
            return;
        };

        let hits = match option.as_str() {
            "a" => match prompt_date("Date (YYYY-MM-DD): ") {
                Some(date) => search::by_exact_date(store.tasks(), date),
                None => Vec::new(),
            },
            "b" => {
                let Some(start) = prompt_date("Start date (YYYY-MM-DD): ") else {
                    browse(store, cfg, Vec::new());
                    continue;
                };
                let Some(end) = prompt_date("End date (YYYY-MM-DD): ") else {
                    browse(store, cfg, Vec::new());
                    continue;
                };
                match search::by_date_range(store.tasks(), start, end) {
                    Ok(hits) => hits,
                    Err(e) => {
                        error(e);
                        continue;
                    }
                }
            }
            "c" => match prompt_minutes("Time spent (minutes): ") {
                Some(minutes) => search::by_time_spent(store.tasks(), minutes),
                None => Vec::new(),
            },
            "d" => {
                let Some(phrase) = read_line("Search for: ") else {
                    return;
                };
                if phrase.is_empty() {
                    Vec::new()
                } else {
                    search::by_phrase(store.tasks(), &phrase)
                }
            }
            "e" => {
                let Some(pattern) = read_line("Regex pattern: ") else {
                    return;
                };
                if pattern.is_empty() {
                    Vec::new()
                } else {
                    match search::by_pattern(store.tasks(), &pattern) {
                        Ok(hits) => hits,
                        Err(e) => {
                            error(e);
                            continue;
                        }
                    }
                }
            }
            "f" => return,
            _ => {
                warning("Sorry, you must choose a valid option.");
                continue;
            }
        };

        browse(store, cfg, hits);
    }
}

/// Page through search hits one record at a time. Edits and deletes go back
/// to the store; the browser keeps the cursor and the hit indices aligned.
fn browse(store: &mut TaskStore, cfg: &Config, hits: Vec<usize>) {
    let mut browser = Browser::new(hits);

    loop {
        match browser.state() {
            BrowserState::Empty => {
                println!();
                info("There are no more tasks to show.");
                let _ = read_line("Press enter to return to the search menu. ");
                return;
            }
            BrowserState::Viewing(slot) => {
                let Some(index) = browser.current() else {
                    return;
                };
                let Some(task) = store.get(index).cloned() else {
                    return;
                };

                println!();
                show_task(&task, &cfg.date_format);
                println!("\nResult {} of {}\n", slot + 1, browser.len());

                let actions = browser.actions();
                println!("{}", action_menu(&actions));

                let Some(option) = read_line("\n> ") else {
                    return;
                };

                match option.to_uppercase().as_str() {
                    "P" if actions.contains(&BrowserAction::Previous) => {
                        browser.previous();
                    }
                    "N" if actions.contains(&BrowserAction::Next) => {
                        browser.next();
                    }
                    "E" => {
                        if let Some(updated) = edit_task_form(&task) {
                            store.replace(index, updated);
                            save_store(store);
                        }
                    }
                    "D" => {
                        if ask_confirmation("Do you really want to delete this task?")
                            && let Some(removed) = browser.remove_current()
                        {
                            store.remove(removed);
                            save_store(store);
                        }
                    }
                    "R" => return,
                    _ => warning("Sorry, you must choose a valid option."),
                }
            }
        }
    }
}

fn action_menu(actions: &[BrowserAction]) -> String {
    let labels: Vec<&str> = actions
        .iter()
        .map(|a| match a {
            BrowserAction::Previous => "[P]revious",
            BrowserAction::Next => "[N]ext",
            BrowserAction::Edit => "[E]dit",
            BrowserAction::Delete => "[D]elete",
            BrowserAction::Return => "[R]eturn to search menu",
        })
        .collect();

    labels.join(", ")
}

/// Failed saves are reported but never end the session: the in-memory store
/// stays authoritative until the next successful save.
fn save_store(store: &TaskStore) {
    if let Err(e) = store.save() {
        error(format!("Could not save the log: {}", e));
    }
}
