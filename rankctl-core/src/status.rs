//! Shared status and category enumerations.
//!
//! Every categorical value that used to float around as a bare string
//! lives here as a proper enum, so panes, filters, and reports all agree
//! on the same domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Lifecycle state of a tracked website project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Paused, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            other => Err(RankError::unknown_value("project status", other)),
        }
    }
}

/// Moderation state of a platform submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Approved,
    Pending,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [Self; 3] = [Self::Approved, Self::Pending, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            "rejected" => Ok(Self::Rejected),
            other => Err(RankError::unknown_value("submission status", other)),
        }
    }
}

/// Family of submission platform (directory, press outlet, forum, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Directory,
    Classified,
    Press,
    Article,
    Social,
    Forum,
    Web2,
    Blog,
}

impl PlatformKind {
    pub const ALL: [Self; 8] = [
        Self::Directory,
        Self::Classified,
        Self::Press,
        Self::Article,
        Self::Social,
        Self::Forum,
        Self::Web2,
        Self::Blog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Classified => "classified",
            Self::Press => "press",
            Self::Article => "article",
            Self::Social => "social",
            Self::Forum => "forum",
            Self::Web2 => "web2",
            Self::Blog => "blog",
        }
    }

    /// Human-facing label for tab headers and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Directory => "Directories",
            Self::Classified => "Classifieds",
            Self::Press => "Press Releases",
            Self::Article => "Article Sites",
            Self::Social => "Social Bookmarking",
            Self::Forum => "Forums & Communities",
            Self::Web2 => "Web 2.0 Platforms",
            Self::Blog => "Blog Networks",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directory" => Ok(Self::Directory),
            "classified" => Ok(Self::Classified),
            "press" => Ok(Self::Press),
            "article" => Ok(Self::Article),
            "social" => Ok(Self::Social),
            "forum" => Ok(Self::Forum),
            "web2" => Ok(Self::Web2),
            "blog" => Ok(Self::Blog),
            other => Err(RankError::unknown_value("platform kind", other)),
        }
    }
}

/// Whether a platform charges for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Free,
    Paid,
}

impl Pricing {
    pub const ALL: [Self; 2] = [Self::Free, Self::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pricing {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            other => Err(RankError::unknown_value("pricing", other)),
        }
    }
}

/// Moderation state of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Banned,
}

impl AccountStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Suspended, Self::Banned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "banned" => Ok(Self::Banned),
            other => Err(RankError::unknown_value("account status", other)),
        }
    }
}

/// Whether a submission platform is accepting listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStatus {
    Active,
    Inactive,
}

impl PlatformStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PlatformStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformStatus {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(RankError::unknown_value("platform status", other)),
        }
    }
}

/// Grouping for the analysis tool catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Analysis,
    Optimization,
    Tracking,
    Utilities,
}

impl ToolCategory {
    pub const ALL: [Self; 4] = [
        Self::Analysis,
        Self::Optimization,
        Self::Tracking,
        Self::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Optimization => "optimization",
            Self::Tracking => "tracking",
            Self::Utilities => "utilities",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analysis" => Ok(Self::Analysis),
            "optimization" => Ok(Self::Optimization),
            "tracking" => Ok(Self::Tracking),
            "utilities" => Ok(Self::Utilities),
            other => Err(RankError::unknown_value("tool category", other)),
        }
    }
}

/// Subscription tier an account is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Basic,
    Premium,
}

impl PlanTier {
    pub const ALL: [Self; 3] = [Self::Free, Self::Basic, Self::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            other => Err(RankError::unknown_value("plan tier", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in ProjectStatus::ALL {
            let parsed: ProjectStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        for status in SubmissionStatus::ALL {
            let parsed: SubmissionStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        for kind in PlatformKind::ALL {
            let parsed: PlatformKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        for pricing in Pricing::ALL {
            let parsed: Pricing = pricing.as_str().parse().unwrap();
            assert_eq!(parsed, pricing);
        }
        for status in AccountStatus::ALL {
            let parsed: AccountStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        for status in PlatformStatus::ALL {
            let parsed: PlatformStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        for category in ToolCategory::ALL {
            let parsed: ToolCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        for tier in PlanTier::ALL {
            let parsed: PlanTier = tier.as_str().parse().unwrap();
            assert_eq!(parsed, tier);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "PAUSED".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Paused
        );
        assert_eq!(
            "Approved".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Approved
        );
        assert_eq!("Premium".parse::<PlanTier>().unwrap(), PlanTier::Premium);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        assert!(err.to_string().contains("archived"));

        assert!("banana".parse::<PlatformKind>().is_err());
        assert!("enterprise".parse::<PlanTier>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let kind: PlatformKind = serde_json::from_str("\"web2\"").unwrap();
        assert_eq!(kind, PlatformKind::Web2);
    }
}
