//! Reports tab: submission history with the same stats the CLI shows

use rankctl_core::{catalog, ReportStats, RetentionPolicy, Roster, SubmissionReport};

use crate::tui::app::ActionItem;

/// Dispatch operation name, also the palette action id
pub const OP_EXPORT: &str = "export";

#[derive(Debug)]
pub struct ReportsPane {
    pub roster: Roster<SubmissionReport>,
}

impl ReportsPane {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            roster: Roster::with_retention(catalog::sample_reports(), retention),
        }
    }

    pub fn actions() -> Vec<ActionItem> {
        vec![ActionItem {
            id: OP_EXPORT,
            name: "Export CSV",
            description: "Export the selected reports (or the whole view)",
        }]
    }

    /// Stats over the whole collection, not just the visible rows
    pub fn stats(&self) -> ReportStats {
        ReportStats::collect(self.roster.records())
    }
}
