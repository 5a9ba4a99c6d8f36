//! Tools tab: the analysis tool catalog and the last run's output

use rankctl_core::{catalog, RetentionPolicy, Roster, SeoTool};

use crate::tui::app::ActionItem;

/// Dispatch operation name for tool runs
pub const OP_ANALYZE: &str = "analysis";
pub const ACT_RUN: &str = "run-tool";

#[derive(Debug)]
pub struct ToolsPane {
    pub roster: Roster<SeoTool>,
    /// Rendered output of the most recent tool run
    pub last_report: Option<String>,
}

impl ToolsPane {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            roster: Roster::with_retention(catalog::tools(), retention),
            last_report: None,
        }
    }

    pub fn actions() -> Vec<ActionItem> {
        vec![ActionItem {
            id: ACT_RUN,
            name: "Run tool",
            description: "Run the tool under the cursor against the active project",
        }]
    }
}
