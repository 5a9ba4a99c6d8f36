//! rankctl dashboard TUI - tabbed, keyboard-driven terminal interface
//!
//! The terminal counterpart of the web dashboard:
//! - Tabs for overview, projects, submissions, tools, reports, admin
//! - The same search + facet + multi-select workflow in every list view
//! - Action palette for bulk operations against the current selection
//! - Simulated backend calls run on the tokio runtime and report back
//!   through a notification channel into the status bar
//! - Plan gating with upgrade notices on free-tier accounts

pub mod app;
pub mod event;
pub mod panes;
pub mod terminal;
pub mod ui;

pub use app::{App, MainTab, Mode};
pub use terminal::run;
