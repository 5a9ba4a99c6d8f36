//! Roster: one list view's state under a single owner.
//!
//! A [`Roster`] owns the record collection, the current [`FilterState`],
//! and the [`SelectionSet`], so every mutation goes through one place and
//! the invariants hold by construction: the visible view is always derived
//! fresh from the filter, the selection never references an id outside the
//! collection, and select-all only ever sees the filtered subset.

use crate::error::{RankError, Result};
use crate::filter::{Facet, FilterState};
use crate::record::Record;
use crate::selection::{RetentionPolicy, SelectionSet};

#[derive(Debug, Clone)]
pub struct Roster<R: Record> {
    records: Vec<R>,
    filter: FilterState,
    selection: SelectionSet,
    retention: RetentionPolicy,
}

impl<R: Record> Roster<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_retention(records, RetentionPolicy::default())
    }

    pub fn with_retention(records: Vec<R>, retention: RetentionPolicy) -> Self {
        Self {
            records,
            filter: FilterState::new(),
            selection: SelectionSet::new(),
            retention,
        }
    }

    // === Collection access ===

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Mutable record access for in-place edits. Callers must not change
    /// the record's id, or the selection could be left pointing nowhere.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Append a record. Ids must stay unique within the roster.
    pub fn push(&mut self, record: R) -> Result<()> {
        if self.get(record.id()).is_some() {
            return Err(RankError::config(format!(
                "duplicate record id '{}'",
                record.id()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a record by id, dropping it from the selection as well so the
    /// selection never holds a dangling id.
    pub fn remove(&mut self, id: &str) -> Result<R> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RankError::unknown_record(id))?;
        let record = self.records.remove(pos);
        self.selection.remove(id);
        Ok(record)
    }

    // === Filtered view ===

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The filtered view: ordered subsequence of the collection passing the
    /// current filter. Recomputed on every call, never cached.
    pub fn visible(&self) -> Vec<&R> {
        self.filter.apply(&self.records)
    }

    /// Indices into `records()` for the filtered view
    pub fn visible_indices(&self) -> Vec<usize> {
        self.filter.indices(&self.records)
    }

    pub fn visible_len(&self) -> usize {
        self.records.iter().filter(|r| self.filter.matches(*r)).count()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.after_filter_change();
    }

    pub fn set_status(&mut self, facet: Facet) {
        self.filter.status = facet;
        self.after_filter_change();
    }

    pub fn set_category(&mut self, facet: Facet) {
        self.filter.category = facet;
        self.after_filter_change();
    }

    /// Distinct status labels present in the collection, first-seen order
    pub fn status_facets(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if let Some(label) = record.status_label() {
                let label = label.to_lowercase();
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    }

    /// Distinct category labels present in the collection
    pub fn category_facets(&self) -> Vec<String> {
        FilterState::category_facets(&self.records)
    }

    /// Advance the status facet through all -> each value -> all
    pub fn cycle_status(&mut self) {
        let next = Self::next_facet(&self.filter.status, &self.status_facets());
        self.set_status(next);
    }

    /// Advance the category facet through all -> each value -> all
    pub fn cycle_category(&mut self) {
        let next = Self::next_facet(&self.filter.category, &self.category_facets());
        self.set_category(next);
    }

    fn next_facet(current: &Facet, options: &[String]) -> Facet {
        if options.is_empty() {
            return Facet::All;
        }
        match current {
            Facet::All => Facet::value(options[0].clone()),
            Facet::Value(v) => match options.iter().position(|o| o == v) {
                Some(pos) if pos + 1 < options.len() => Facet::value(options[pos + 1].clone()),
                _ => Facet::All,
            },
        }
    }

    // === Selection ===

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.selection.iter().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Toggle one record in or out of the selection. Unknown ids are an
    /// error so the selection can never leave the collection.
    pub fn toggle(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(RankError::unknown_record(id));
        }
        self.selection.toggle(id);
        Ok(())
    }

    /// Select-all against the filtered view: selection becomes exactly the
    /// visible ids, or empties if it already equals them.
    pub fn select_all_visible(&mut self) {
        let visible: Vec<&str> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(*r))
            .map(|r| r.id())
            .collect();
        self.selection.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// True when every visible record is selected (and there is at least one)
    pub fn all_visible_selected(&self) -> bool {
        let visible: Vec<&str> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(*r))
            .map(|r| r.id())
            .collect();
        !visible.is_empty() && self.selection.matches_exactly(&visible)
    }

    // === View lifecycle ===

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    pub fn set_retention(&mut self, retention: RetentionPolicy) {
        self.retention = retention;
        self.after_filter_change();
    }

    /// Reset filter and selection together, as happens on a tab switch.
    pub fn reset_view(&mut self) {
        self.filter.clear();
        self.selection.clear();
    }

    fn after_filter_change(&mut self) {
        if self.retention == RetentionPolicy::Prune {
            let visible: Vec<String> = self
                .records
                .iter()
                .filter(|r| self.filter.matches(*r))
                .map(|r| r.id().to_string())
                .collect();
            self.selection
                .retain_where(|id| visible.iter().any(|v| v == id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::record::Project;

    fn project_roster() -> Roster<Project> {
        Roster::new(catalog::sample_projects())
    }

    #[test]
    fn test_visible_tracks_filter() {
        let mut roster = project_roster();
        assert_eq!(roster.visible_len(), 3);

        roster.set_status(Facet::value("paused"));
        let visible = roster.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Local Restaurant");

        roster.set_status(Facet::All);
        assert_eq!(roster.visible_len(), 3);
    }

    #[test]
    fn test_select_all_scopes_to_filtered_view() {
        let mut roster = project_roster();
        roster.set_status(Facet::value("active"));
        roster.select_all_visible();

        // Two active projects, not all three
        assert_eq!(roster.selected_count(), 2);
        assert!(!roster.selection().contains("proj-3"));
    }

    #[test]
    fn test_selection_survives_filter_relax_under_retain() {
        let mut roster = project_roster();
        assert_eq!(roster.retention(), RetentionPolicy::Retain);

        roster.set_search("blog");
        roster.select_all_visible();
        assert_eq!(roster.selected_count(), 1);

        // Clearing the filter widens the view but not the selection
        roster.set_search("");
        assert_eq!(roster.visible_len(), 3);
        assert_eq!(roster.selected_count(), 1);
    }

    #[test]
    fn test_prune_policy_drops_hidden_selection() {
        let mut roster =
            Roster::with_retention(catalog::sample_projects(), RetentionPolicy::Prune);
        roster.select_all_visible();
        assert_eq!(roster.selected_count(), 3);

        roster.set_status(Facet::value("paused"));
        assert_eq!(roster.selected_count(), 1);
        assert!(roster.selection().contains("proj-3"));
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let mut roster = project_roster();
        let err = roster.toggle("no-such-id").unwrap_err();
        assert!(err.to_string().contains("no-such-id"));
        assert_eq!(roster.selected_count(), 0);
    }

    #[test]
    fn test_remove_prunes_selection() {
        let mut roster = project_roster();
        roster.toggle("proj-1").unwrap();
        roster.toggle("proj-2").unwrap();

        let removed = roster.remove("proj-1").unwrap();
        assert_eq!(removed.name, "E-commerce Store");
        assert!(!roster.selection().contains("proj-1"));
        assert_eq!(roster.selected_count(), 1);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut roster = project_roster();
        roster.toggle("proj-3").unwrap();

        roster.get_mut("proj-3").unwrap().status = crate::status::ProjectStatus::Active;

        assert_eq!(roster.get("proj-3").unwrap().status.as_str(), "active");
        assert!(roster.selection().contains("proj-3"));
        assert!(roster.get_mut("no-such-id").is_none());
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut roster = project_roster();
        let dup = roster.records()[0].clone();
        assert!(roster.push(dup).is_err());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_reset_view_clears_filter_and_selection() {
        let mut roster = project_roster();
        roster.set_search("blog");
        roster.select_all_visible();
        assert_eq!(roster.selected_count(), 1);

        roster.reset_view();
        assert!(roster.filter().is_neutral());
        assert_eq!(roster.selected_count(), 0);
        assert_eq!(roster.visible_len(), 3);
    }

    #[test]
    fn test_cycle_status_wraps_back_to_all() {
        let mut roster = project_roster();
        let facets = roster.status_facets();
        assert_eq!(facets, vec!["active".to_string(), "paused".to_string()]);

        roster.cycle_status();
        assert_eq!(roster.filter().status, Facet::value("active"));
        roster.cycle_status();
        assert_eq!(roster.filter().status, Facet::value("paused"));
        roster.cycle_status();
        assert_eq!(roster.filter().status, Facet::All);
    }

    #[test]
    fn test_all_visible_selected_reflects_view() {
        let mut roster = project_roster();
        assert!(!roster.all_visible_selected());

        roster.set_status(Facet::value("active"));
        roster.select_all_visible();
        assert!(roster.all_visible_selected());

        // Widening the view makes the selection partial again
        roster.set_status(Facet::All);
        assert!(!roster.all_visible_selected());
    }
}
