use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

use worklog::models::Task;
use worklog::store::TaskStore;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn task(date: &str, title: &str) -> Task {
    Task::new(d(date), title, 30, "")
}

fn temp_log(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_worklog_store.csv", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn insert_sorted_keeps_dates_non_decreasing() {
    let mut store = TaskStore::new(temp_log("sorted"));

    store.insert_sorted(task("2024-01-06", "a"));
    store.insert_sorted(task("2024-01-02", "b"));
    store.insert_sorted(task("2024-01-04", "c"));
    store.insert_sorted(task("2024-01-02", "d"));

    let dates: Vec<NaiveDate> = store.tasks().iter().map(|t| t.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn insert_sorted_is_stable_for_equal_dates() {
    let mut store = TaskStore::new(temp_log("stable"));

    store.insert_sorted(task("2024-01-06", "later"));
    store.insert_sorted(task("2024-01-05", "first"));
    store.insert_sorted(task("2024-01-05", "second"));
    store.insert_sorted(task("2024-01-05", "third"));

    let titles: Vec<&str> = store
        .tasks()
        .iter()
        .filter(|t| t.date == d("2024-01-05"))
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
    assert_eq!(store.tasks()[3].title, "later");
}

#[test]
fn insert_sorted_into_sorted_store_keeps_it_sorted() {
    let mut store = TaskStore::new(temp_log("idempotent"));
    for day in ["2024-01-01", "2024-01-03", "2024-01-05"] {
        store.insert_sorted(task(day, day));
    }

    store.insert_sorted(task("2024-01-04", "new"));

    let dates: Vec<NaiveDate> = store.tasks().iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        [
            d("2024-01-01"),
            d("2024-01-03"),
            d("2024-01-04"),
            d("2024-01-05")
        ]
    );
}

#[test]
fn load_missing_file_yields_empty_store() {
    let path = temp_log("missing");
    let store = TaskStore::load(&path).unwrap();
    assert!(store.is_empty());
}

#[test]
fn save_then_load_round_trips_field_for_field() {
    let path = temp_log("roundtrip");
    let mut store = TaskStore::new(&path);

    store.insert_sorted(Task::new(d("2024-01-05"), "Team Meeting", 30, "weekly sync"));
    store.insert_sorted(Task::new(d("2024-01-02"), "Fix bug #42", 90, "urgent, from support"));
    store.insert_sorted(Task::new(d("2024-01-05"), "Review", 15, ""));
    store.save().unwrap();

    let reloaded = TaskStore::load(&path).unwrap();
    assert_eq!(reloaded.tasks(), store.tasks());
}

#[test]
fn save_writes_the_header_even_when_empty() {
    let path = temp_log("header");
    TaskStore::new(&path).save().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Date,Title,Time,Notes"));
}

#[test]
fn replace_keeps_the_slot() {
    let mut store = TaskStore::new(temp_log("replace"));
    store.insert_sorted(task("2024-01-01", "a"));
    store.insert_sorted(task("2024-01-02", "b"));

    store.replace(0, Task::new(d("2024-01-09"), "edited", 10, ""));

    assert_eq!(store.tasks()[0].title, "edited");
    assert_eq!(store.tasks()[1].title, "b");
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_shifts_later_tasks_left() {
    let mut store = TaskStore::new(temp_log("remove"));
    store.insert_sorted(task("2024-01-01", "a"));
    store.insert_sorted(task("2024-01-02", "b"));
    store.insert_sorted(task("2024-01-03", "c"));

    let removed = store.remove(1);

    assert_eq!(removed.title, "b");
    assert_eq!(store.len(), 2);
    assert_eq!(store.tasks()[1].title, "c");
}
