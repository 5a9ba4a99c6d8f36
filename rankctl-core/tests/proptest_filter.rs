use proptest::prelude::*;
use rankctl_core::filter::{Facet, FilterState};
use rankctl_core::record::{Project, Record};
use rankctl_core::roster::Roster;
use rankctl_core::selection::RetentionPolicy;
use rankctl_core::status::ProjectStatus;

// Small alphabet so searches actually hit something.
fn arb_word() -> impl Strategy<Value = String> {
    "[abcd]{0,6}"
}

fn arb_status() -> impl Strategy<Value = ProjectStatus> {
    prop::sample::select(ProjectStatus::ALL.to_vec())
}

// Projects with index-based ids so uniqueness holds by construction.
fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec((arb_word(), arb_word(), arb_status()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, url, status))| {
                let mut project = Project::new(name, url, vec![], "");
                project.id = format!("p{i}");
                project.status = status;
                project
            })
            .collect()
    })
}

proptest! {
    /// Property: the filtered view is an order-preserving subsequence of
    /// the source, and a neutral filter is the identity.
    #[test]
    fn prop_apply_yields_ordered_subsequence(
        projects in arb_projects(),
        search in arb_word(),
    ) {
        let mut filter = FilterState::new();
        filter.search = search;

        let visible = filter.apply(&projects);

        // Subsequence: indices are strictly increasing positions in source.
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| projects.iter().position(|p| p.id == v.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Identity when neutral.
        filter.clear();
        prop_assert!(filter.is_neutral());
        prop_assert_eq!(filter.apply(&projects).len(), projects.len());
    }

    /// Property: every visible record matches the predicate and every
    /// hidden record does not.
    #[test]
    fn prop_apply_partitions_by_matches(
        projects in arb_projects(),
        search in arb_word(),
        status in arb_status(),
    ) {
        let mut filter = FilterState::new();
        filter.search = search;
        filter.status = Facet::value(status.as_str());

        let visible_ids: Vec<&str> = filter.apply(&projects).iter().map(|p| p.id()).collect();
        for project in &projects {
            let shown = visible_ids.contains(&project.id());
            prop_assert_eq!(shown, filter.matches(project));
        }
    }

    /// Property: search matching ignores case.
    #[test]
    fn prop_search_is_case_insensitive(
        projects in arb_projects(),
        search in arb_word(),
    ) {
        let mut lower = FilterState::new();
        lower.search = search.to_lowercase();
        let mut upper = FilterState::new();
        upper.search = search.to_uppercase();

        let a: Vec<&str> = lower.apply(&projects).iter().map(|p| p.id()).collect();
        let b: Vec<&str> = upper.apply(&projects).iter().map(|p| p.id()).collect();
        prop_assert_eq!(a, b);
    }

    /// Property: adding a facet on top of a search can only narrow the
    /// view, never widen it.
    #[test]
    fn prop_facet_narrows_search_results(
        projects in arb_projects(),
        search in arb_word(),
        status in arb_status(),
    ) {
        let mut search_only = FilterState::new();
        search_only.search = search.clone();
        let broad: Vec<&str> = search_only.apply(&projects).iter().map(|p| p.id()).collect();

        let mut both = search_only.clone();
        both.status = Facet::value(status.as_str());
        let narrow = both.apply(&projects);

        prop_assert!(narrow.len() <= broad.len());
        for row in narrow {
            prop_assert!(broad.contains(&row.id()));
        }
    }

    /// Property: select-all marks exactly the visible ids; a second
    /// select-all empties the selection again.
    #[test]
    fn prop_select_all_is_scoped_and_involutive(
        projects in arb_projects(),
        search in arb_word(),
    ) {
        let mut roster = Roster::new(projects);
        roster.set_search(search);

        roster.select_all_visible();
        let visible: Vec<String> =
            roster.visible().iter().map(|p| p.id().to_string()).collect();
        prop_assert_eq!(roster.selected_count(), visible.len());
        for id in &visible {
            prop_assert!(roster.selection().contains(id));
        }

        roster.select_all_visible();
        if visible.is_empty() {
            // Nothing visible: both calls were no-ops.
            prop_assert_eq!(roster.selected_count(), 0);
        } else {
            prop_assert!(roster.selection().is_empty());
        }
    }

    /// Property: under the prune policy the selection is always a subset
    /// of the visible view, whatever sequence of filter edits happens.
    #[test]
    fn prop_prune_policy_keeps_selection_visible(
        projects in arb_projects(),
        searches in prop::collection::vec(arb_word(), 1..6),
    ) {
        let mut roster = Roster::with_retention(projects, RetentionPolicy::Prune);
        roster.select_all_visible();

        for search in searches {
            roster.set_search(search);
            let visible: Vec<String> =
                roster.visible().iter().map(|p| p.id().to_string()).collect();
            for id in roster.selected_ids() {
                prop_assert!(visible.iter().any(|v| v == id));
            }
        }
    }

    /// Property: toggling the same id twice restores the selection.
    #[test]
    fn prop_toggle_twice_is_identity(projects in arb_projects()) {
        prop_assume!(!projects.is_empty());
        let id = projects[0].id.clone();
        let mut roster = Roster::new(projects);

        let before: Vec<String> =
            roster.selected_ids().iter().map(|s| s.to_string()).collect();
        roster.toggle(&id).unwrap();
        roster.toggle(&id).unwrap();
        let after: Vec<String> =
            roster.selected_ids().iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(before, after);
    }
}
