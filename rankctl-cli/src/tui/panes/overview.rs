//! Overview tab: activity feed and directory leaderboard
//!
//! Submission stats render live from the reports pane, so this pane only
//! carries the feed data.

use rankctl_core::catalog;
use rankctl_core::stats::{ActivityEntry, DirectoryPerformance};

#[derive(Debug)]
pub struct OverviewPane {
    pub activity: Vec<ActivityEntry>,
    pub top_directories: Vec<DirectoryPerformance>,
}

impl OverviewPane {
    pub fn new() -> Self {
        Self {
            activity: catalog::recent_activity(),
            top_directories: catalog::top_directories(),
        }
    }
}

impl Default for OverviewPane {
    fn default() -> Self {
        Self::new()
    }
}
