//! Admin tab: user moderation roster, managed directories, system stats

use rankctl_core::stats::SystemStats;
use rankctl_core::{catalog, AdminDirectory, AdminUser, ModerationAction, RetentionPolicy, Roster};

use crate::tui::app::ActionItem;

#[derive(Debug)]
pub struct AdminPane {
    pub users: Roster<AdminUser>,
    pub directories: Vec<AdminDirectory>,
    pub stats: SystemStats,
}

impl AdminPane {
    pub fn new(retention: RetentionPolicy) -> Self {
        Self {
            users: Roster::with_retention(catalog::sample_users(), retention),
            directories: catalog::sample_directories(),
            stats: catalog::system_stats(),
        }
    }

    /// Moderation actions double as dispatch operation names.
    pub fn actions() -> Vec<ActionItem> {
        ModerationAction::ALL
            .iter()
            .map(|action| {
                let (name, description) = match action {
                    ModerationAction::Activate => {
                        ("Activate", "Reactivate the selected accounts")
                    }
                    ModerationAction::Suspend => ("Suspend", "Suspend the selected accounts"),
                    ModerationAction::Delete => ("Delete", "Delete the selected accounts"),
                };
                ActionItem {
                    id: action.as_str(),
                    name,
                    description,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_moderation_action_is_in_the_palette() {
        let ids: Vec<&str> = AdminPane::actions().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["activate", "suspend", "delete"]);
        for id in ids {
            assert!(id.parse::<ModerationAction>().is_ok());
        }
    }
}
