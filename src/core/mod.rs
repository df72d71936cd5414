pub mod backup;
pub mod browser;
pub mod search;

pub use browser::{Browser, BrowserAction, BrowserState};
