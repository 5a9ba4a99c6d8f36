//! Per-tab pane state
//!
//! Each pane owns its roster plus whatever extra state the tab needs;
//! the `App` aggregates them. Action id constants live next to the pane
//! that announces them, so the palette and the dispatch routing cannot
//! drift apart.

pub mod admin;
pub mod overview;
pub mod projects;
pub mod reports;
pub mod submission;
pub mod tools;

pub use admin::AdminPane;
pub use overview::OverviewPane;
pub use projects::ProjectsPane;
pub use reports::ReportsPane;
pub use submission::SubmissionPane;
pub use tools::ToolsPane;
