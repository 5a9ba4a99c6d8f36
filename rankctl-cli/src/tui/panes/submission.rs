//! Submissions tab: one platform roster per submission kind
//!
//! Paging to another kind rebuilds the roster from the catalog, so the
//! search, facets, and selection always start clean for the new list.

use rankctl_core::{catalog, Platform, PlatformKind, RetentionPolicy, Roster};

use crate::tui::app::ActionItem;

/// Dispatch operation name, also the palette action id
pub const OP_SUBMIT: &str = "submit";
pub const ACT_NEXT_PROJECT: &str = "next-project";

#[derive(Debug)]
pub struct SubmissionPane {
    /// Which platform family the roster currently shows
    pub kind: PlatformKind,
    pub roster: Roster<Platform>,
    /// Position in the projects roster of the project being submitted
    pub project_ix: usize,
    /// Submissions spent from this month's quota
    pub submitted_this_month: usize,
    retention: RetentionPolicy,
}

impl SubmissionPane {
    pub fn new(retention: RetentionPolicy) -> Self {
        let kind = PlatformKind::Directory;
        Self {
            kind,
            roster: Roster::with_retention(catalog::platforms_of_kind(kind), retention),
            project_ix: 0,
            submitted_this_month: 0,
            retention,
        }
    }

    pub fn actions() -> Vec<ActionItem> {
        vec![
            ActionItem {
                id: OP_SUBMIT,
                name: "Submit",
                description: "Submit the active project to the selected platforms",
            },
            ActionItem {
                id: ACT_NEXT_PROJECT,
                name: "Next project",
                description: "Cycle which project gets submitted",
            },
        ]
    }

    /// Switch platform kind; filter and selection reset with the roster.
    pub fn set_kind(&mut self, kind: PlatformKind) {
        self.kind = kind;
        self.roster = Roster::with_retention(catalog::platforms_of_kind(kind), self.retention);
    }

    pub fn next_kind(&mut self) {
        let pos = self.kind_index();
        self.set_kind(PlatformKind::ALL[(pos + 1) % PlatformKind::ALL.len()]);
    }

    pub fn prev_kind(&mut self) {
        let pos = self.kind_index();
        let len = PlatformKind::ALL.len();
        self.set_kind(PlatformKind::ALL[(pos + len - 1) % len]);
    }

    /// 1-based position of the active kind, with the total, for the header
    pub fn kind_position(&self) -> (usize, usize) {
        (self.kind_index() + 1, PlatformKind::ALL.len())
    }

    pub fn record_submission(&mut self, count: usize) {
        self.submitted_this_month += count;
    }

    fn kind_index(&self) -> usize {
        PlatformKind::ALL
            .iter()
            .position(|k| *k == self.kind)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_paging_wraps_both_ways() {
        let mut pane = SubmissionPane::new(RetentionPolicy::Retain);
        assert_eq!(pane.kind, PlatformKind::Directory);

        pane.prev_kind();
        assert_eq!(pane.kind, PlatformKind::Blog);
        pane.next_kind();
        assert_eq!(pane.kind, PlatformKind::Directory);
        assert_eq!(pane.kind_position(), (1, 8));
    }

    #[test]
    fn test_kind_switch_resets_filter_and_selection() {
        let mut pane = SubmissionPane::new(RetentionPolicy::Retain);
        pane.roster.set_search("google");
        pane.roster.select_all_visible();
        assert!(pane.roster.selected_count() > 0);

        pane.next_kind();
        assert!(pane.roster.filter().is_neutral());
        assert_eq!(pane.roster.selected_count(), 0);
        assert!(pane.roster.records().iter().all(|p| p.kind == pane.kind));
    }
}
