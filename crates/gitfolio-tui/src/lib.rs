// Terminal UI implementation using ratatui

pub mod app;
pub mod debounce;
pub mod event;
pub mod runner;
pub mod ui;

pub use app::{Action, App, InputMode};
pub use event::AppEvent;
pub use runner::run_tui;
