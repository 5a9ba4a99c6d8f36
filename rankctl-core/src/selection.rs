//! Multi-select state for list views.
//!
//! A [`SelectionSet`] is a duplicate-free set of record ids kept in toggle
//! order. It knows nothing about filtering; the roster decides which ids
//! are visible and passes them in where needed.

use serde::{Deserialize, Serialize};

/// What happens to selected ids that fall out of the filtered view.
///
/// `Retain` keeps them selected while hidden (they come back when the
/// filter relaxes). `Prune` drops them as soon as the view stops showing
/// them. Configurable via `behavior.selection_retention`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetentionPolicy {
    #[default]
    Retain,
    Prune,
}

/// A duplicate-free, insertion-ordered set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// All selected ids, in the order they were toggled on
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Insert without toggling. Returns false if already selected.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with exactly `ids`, deduplicated in order.
    pub fn set_exactly<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.clear();
        for id in ids {
            let id = id.into();
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Set equality against a list of ids, ignoring order.
    pub fn matches_exactly(&self, ids: &[&str]) -> bool {
        self.ids.len() == ids.len() && ids.iter().all(|id| self.contains(id))
    }

    /// Select-all against the visible view: if the selection already equals
    /// the view it empties (toggle off), otherwise it becomes exactly the
    /// view. Never touches records outside `visible`.
    pub fn select_all(&mut self, visible: &[&str]) {
        if self.matches_exactly(visible) {
            self.clear();
        } else {
            self.set_exactly(visible.iter().copied());
        }
    }

    /// Drop every selected id the predicate rejects. Used for the `Prune`
    /// retention policy and for ids removed from the collection itself.
    pub fn retain_where<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.ids.retain(|id| keep(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = SelectionSet::new();
        sel.toggle("p1");
        sel.toggle("p2");
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("p1"));

        sel.toggle("p1");
        assert_eq!(sel.len(), 1);
        assert!(!sel.contains("p1"));
        assert!(sel.contains("p2"));
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut sel = SelectionSet::new();
        assert!(sel.insert("p1"));
        assert!(!sel.insert("p1"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_select_all_twice_empties() {
        let visible = ["p1", "p3"];
        let mut sel = SelectionSet::new();

        sel.select_all(&visible);
        assert!(sel.matches_exactly(&visible));

        sel.select_all(&visible);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_selection() {
        let visible = ["p1", "p3"];
        let mut sel = SelectionSet::new();
        sel.toggle("p1");

        // Partial selection: select-all completes rather than clears
        sel.select_all(&visible);
        assert!(sel.matches_exactly(&visible));
    }

    #[test]
    fn test_select_all_scopes_to_visible_only() {
        let mut sel = SelectionSet::new();
        sel.toggle("hidden");

        sel.select_all(&["p1", "p2"]);
        assert!(!sel.contains("hidden"));
        assert!(sel.matches_exactly(&["p1", "p2"]));
    }

    #[test]
    fn test_matches_exactly_ignores_order() {
        let mut sel = SelectionSet::new();
        sel.toggle("b");
        sel.toggle("a");
        assert!(sel.matches_exactly(&["a", "b"]));
        assert!(!sel.matches_exactly(&["a"]));
        assert!(!sel.matches_exactly(&["a", "b", "c"]));
    }

    #[test]
    fn test_retain_where_prunes() {
        let mut sel = SelectionSet::new();
        sel.toggle("p1");
        sel.toggle("p2");
        sel.toggle("p3");

        sel.retain_where(|id| id != "p2");
        assert_eq!(sel.ids(), &["p1".to_string(), "p3".to_string()]);
    }
}
