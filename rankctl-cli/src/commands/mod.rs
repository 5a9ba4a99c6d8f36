//! Command implementations for rankctl CLI

pub mod config;
pub mod plans;
pub mod projects;
pub mod reports;
pub mod submit;
pub mod tools;

// Re-export main dispatcher functions for flat access from main.rs
pub use config::run_config;
pub use plans::run_plans;
pub use projects::run_projects;
pub use reports::run_reports;
pub use submit::run_submit;
pub use tools::run_tools;
