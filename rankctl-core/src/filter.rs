//! Filter predicate composition over record collections.
//!
//! A [`FilterState`] combines a free-text search term with categorical
//! facets. All active predicates must hold for a record to pass (logical
//! AND), matching is case-insensitive, and the output preserves source
//! order. Filtering is pure: it never mutates the collection and two calls
//! with the same inputs return the same rows.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One categorical facet: either the "all" sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet {
    /// Sentinel meaning "do not constrain this axis"
    All,
    /// Match records whose label equals this value, ignoring case
    Value(String),
}

impl Facet {
    /// Build a concrete facet, normalizing to lowercase.
    ///
    /// Facet values derived from record labels are lowercased at the source
    /// (see [`FilterState::category_facets`]), so normalizing here keeps
    /// comparisons allocation-free.
    pub fn value(v: impl Into<String>) -> Self {
        Self::Value(v.into().to_lowercase())
    }

    /// True when this facet accepts the given record label.
    ///
    /// `All` accepts anything, including records without the axis.
    /// A concrete value never accepts a record whose label is `None`.
    pub fn accepts(&self, label: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(v) => label.is_some_and(|l| l.eq_ignore_ascii_case(v)),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Display string, rendering the sentinel as "all"
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Value(v) => v,
        }
    }
}

impl Default for Facet {
    fn default() -> Self {
        Self::All
    }
}

/// The complete filter input for one list view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Substring searched for in every `search_text()` field
    pub search: String,
    /// Status facet, `Facet::All` when inactive
    pub status: Facet,
    /// Category facet, `Facet::All` when inactive
    pub category: Facet,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no predicate is active and `apply` is the identity
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty() && self.status.is_all() && self.category.is_all()
    }

    /// Reset every predicate back to neutral
    pub fn clear(&mut self) {
        self.search.clear();
        self.status = Facet::All;
        self.category = Facet::All;
    }

    /// Decide whether a single record passes every active predicate.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        self.status.accepts(record.status_label()) && self.category.accepts(record.category_label())
    }

    /// Produce the filtered view: the ordered subsequence of `records`
    /// passing [`Self::matches`]. Borrowing keeps this cheap to call on
    /// every keystroke.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Like [`Self::apply`] but yielding indices into `records`, which is
    /// what list widgets want for cursor tracking.
    pub fn indices<R: Record>(&self, records: &[R]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.matches(*r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Derive the category facet choices present in a collection, in first
    /// occurrence order, lowercased and deduplicated. The "all" sentinel is
    /// not included; views prepend it themselves.
    pub fn category_facets<R: Record>(records: &[R]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in records {
            if let Some(label) = record.category_label() {
                let label = label.to_lowercase();
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    }
}
