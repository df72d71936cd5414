use chrono::NaiveDate;

use worklog::core::search;
use worklog::errors::AppError;
use worklog::models::Task;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample() -> Vec<Task> {
    vec![
        Task::new(d("2023-12-31"), "Year end review", 60, "retrospective"),
        Task::new(d("2024-01-05"), "Team Meeting", 30, "weekly sync"),
        Task::new(d("2024-01-05"), "Fix bug #42", 45, "crash on startup"),
        Task::new(d("2024-01-06"), "Major Fix later", 30, "deferred"),
        Task::new(d("2024-01-15"), "Planning", 30, "next sprint"),
    ]
}

#[test]
fn exact_date_returns_matches_in_store_order() {
    let tasks = sample();
    let hits = search::by_exact_date(&tasks, d("2024-01-05"));
    assert_eq!(hits, [1, 2]);
}

#[test]
fn exact_date_with_no_match_is_empty() {
    let tasks = sample();
    assert!(search::by_exact_date(&tasks, d("2022-01-01")).is_empty());
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let tasks = sample();
    let hits = search::by_date_range(&tasks, d("2024-01-05"), d("2024-01-06")).unwrap();
    assert_eq!(hits, [1, 2, 3]);
}

#[test]
fn date_range_excludes_dates_outside() {
    let tasks = sample();
    let hits = search::by_date_range(&tasks, d("2024-01-01"), d("2024-01-10")).unwrap();
    assert_eq!(hits, [1, 2, 3]);

    let none = search::by_date_range(&tasks, d("2020-01-01"), d("2020-12-31")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn reversed_date_range_is_rejected_not_swapped() {
    let tasks = sample();
    let err = search::by_date_range(&tasks, d("2024-01-10"), d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));
}

#[test]
fn time_spent_matches_exact_minutes_only() {
    let tasks = sample();
    let hits = search::by_time_spent(&tasks, 30);
    assert_eq!(hits, [1, 3, 4]);
    assert!(search::by_time_spent(&tasks, 31).is_empty());
}

#[test]
fn phrase_search_is_case_insensitive() {
    let tasks = sample();
    let hits = search::by_phrase(&tasks, "meeting");
    assert_eq!(hits, [1]);
}

#[test]
fn phrase_search_covers_notes_too_without_duplicates() {
    let tasks = vec![Task::new(
        d("2024-01-05"),
        "sync sync sync",
        30,
        "more sync here",
    )];
    // several matches across title and notes, still one hit
    assert_eq!(search::by_phrase(&tasks, "sync"), [0]);
}

#[test]
fn regex_search_uses_match_anywhere_semantics() {
    let tasks = sample();
    let hits = search::by_pattern(&tasks, "^Fix").unwrap();
    assert_eq!(hits, [2]); // "Major Fix later" must not match an anchored Fix

    let hits = search::by_pattern(&tasks, "bug #\\d+").unwrap();
    assert_eq!(hits, [2]);
}

#[test]
fn invalid_regex_pattern_is_surfaced() {
    let tasks = sample();
    let err = search::by_pattern(&tasks, "(").unwrap_err();
    assert!(matches!(err, AppError::InvalidPattern(_)));
}

#[test]
fn searches_never_mutate_the_input() {
    let tasks = sample();
    let before = tasks.clone();
    let _ = search::by_exact_date(&tasks, d("2024-01-05"));
    let _ = search::by_phrase(&tasks, "fix");
    let _ = search::by_pattern(&tasks, "a+").unwrap();
    assert_eq!(tasks, before);
}
