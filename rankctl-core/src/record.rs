//! Domain record types and the `Record` trait.
//!
//! Every entity that can appear in a filterable list implements [`Record`],
//! which is all the filter and selection machinery needs to know about it.
//! The concrete structs mirror what the dashboard tracks: website projects,
//! submission platforms, analysis tools, submission reports, and the admin
//! views over users and directories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::{
    AccountStatus, PlatformKind, PlanTier, PlatformStatus, Pricing, ProjectStatus,
    SubmissionStatus, ToolCategory,
};

/// Uniform view over anything that can sit in a filterable, selectable list.
///
/// `search_text` returns the display fields the text search runs over;
/// a record matches when any one of them contains the search term.
/// The label getters return `None` when the record type has no such facet
/// axis (the submission view does not facet platforms by status even though
/// platforms carry one), and an active facet never matches a record that
/// returns `None` for it.
pub trait Record {
    /// Stable identifier, unique within one collection
    fn id(&self) -> &str;

    /// Display fields subject to substring search
    fn search_text(&self) -> Vec<&str>;

    /// Status label for facet filtering, if this record type has one
    fn status_label(&self) -> Option<&str> {
        None
    }

    /// Category label for facet filtering, if this record type has one
    fn category_label(&self) -> Option<&str> {
        None
    }
}

/// A website the user is building rankings for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Project {
    /// New project with a fresh id, active status, and current timestamps.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        keywords: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            url: url.into(),
            keywords,
            description: description.into(),
            status: ProjectStatus::Active,
            created_at: now,
            last_updated: now,
        }
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.url]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// A third-party site that accepts submissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub kind: PlatformKind,
    /// Free-form grouping within a kind ("Business", "Local", "Content", ...)
    pub category: String,
    pub page_rank: u8,
    pub status: PlatformStatus,
    pub pricing: Pricing,
    pub description: String,
    /// What the platform asks for before it lists a site
    pub requirements: Vec<String>,
    /// Typical moderation turnaround, e.g. "2-3 days"
    pub approval_time: String,
}

impl Record for Platform {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.domain]
    }

    fn category_label(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// An on-demand analysis tool from the tool catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoTool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    /// Names of the inputs the tool prompts for
    pub inputs: Vec<String>,
}

impl Record for SeoTool {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category_label(&self) -> Option<&str> {
        Some(self.category.as_str())
    }
}

/// Outcome of one submission of a project to a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub id: String,
    pub project_name: String,
    pub platform_name: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub page_rank: u8,
}

impl Record for SubmissionReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.project_name, &self.platform_name]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    // The reports view facets on the owning project.
    fn category_label(&self) -> Option<&str> {
        Some(&self.project_name)
    }
}

/// An account as seen from the admin moderation view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: PlanTier,
    pub status: AccountStatus,
    pub joined_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub projects: u32,
    pub submissions: u32,
}

impl Record for AdminUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category_label(&self) -> Option<&str> {
        Some(self.plan.as_str())
    }
}

/// A managed directory as seen from the admin view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDirectory {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub category: String,
    pub page_rank: u8,
    pub status: PlatformStatus,
    pub submissions: u32,
    /// Share of submissions approved, in percent
    pub approval_rate: f64,
}

impl Record for AdminDirectory {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.domain]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category_label(&self) -> Option<&str> {
        Some(&self.category)
    }
}
