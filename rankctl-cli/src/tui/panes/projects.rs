//! Projects tab: roster plus the local bulk mutations

use chrono::Utc;
use rankctl_core::{catalog, Project, ProjectStatus, RetentionPolicy, Roster};

use crate::tui::app::ActionItem;

pub const ACT_PAUSE: &str = "pause";
pub const ACT_ACTIVATE: &str = "activate";
pub const ACT_REMOVE: &str = "remove";

#[derive(Debug)]
pub struct ProjectsPane {
    pub roster: Roster<Project>,
}

impl ProjectsPane {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            roster: Roster::with_retention(catalog::sample_projects(), retention),
        }
    }

    pub fn actions() -> Vec<ActionItem> {
        vec![
            ActionItem {
                id: ACT_PAUSE,
                name: "Pause",
                description: "Pause the selected projects",
            },
            ActionItem {
                id: ACT_ACTIVATE,
                name: "Activate",
                description: "Resume the selected projects",
            },
            ActionItem {
                id: ACT_REMOVE,
                name: "Remove",
                description: "Remove the selected projects",
            },
        ]
    }

    /// Set every selected project to `status`. Returns how many changed.
    pub fn set_selected_status(&mut self, status: ProjectStatus) -> usize {
        let ids: Vec<String> = self
            .roster
            .selected_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        let mut changed = 0;
        for id in &ids {
            if let Some(project) = self.roster.get_mut(id) {
                if project.status != status {
                    project.status = status;
                    project.last_updated = Utc::now();
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Remove every selected project. Returns how many went away.
    pub fn remove_selected(&mut self) -> usize {
        let ids: Vec<String> = self
            .roster
            .selected_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        let mut removed = 0;
        for id in &ids {
            if self.roster.remove(id).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_touches_only_selected_rows() {
        let mut pane = ProjectsPane::new(RetentionPolicy::Retain);
        pane.roster.toggle("proj-1").unwrap();
        pane.roster.toggle("proj-2").unwrap();

        let changed = pane.set_selected_status(ProjectStatus::Paused);

        assert_eq!(changed, 2);
        assert_eq!(
            pane.roster.get("proj-1").unwrap().status,
            ProjectStatus::Paused
        );
        // proj-3 was already paused and untouched
        assert_eq!(
            pane.roster.get("proj-3").unwrap().status,
            ProjectStatus::Paused
        );
    }

    #[test]
    fn test_status_change_skips_rows_already_there() {
        let mut pane = ProjectsPane::new(RetentionPolicy::Retain);
        pane.roster.toggle("proj-3").unwrap(); // already paused

        let changed = pane.set_selected_status(ProjectStatus::Paused);
        assert_eq!(changed, 0);
    }

    #[test]
    fn test_remove_selected_prunes_the_selection() {
        let mut pane = ProjectsPane::new(RetentionPolicy::Retain);
        pane.roster.toggle("proj-1").unwrap();
        pane.roster.toggle("proj-3").unwrap();

        let removed = pane.remove_selected();

        assert_eq!(removed, 2);
        assert_eq!(pane.roster.len(), 1);
        assert_eq!(pane.roster.selected_count(), 0);
    }
}
