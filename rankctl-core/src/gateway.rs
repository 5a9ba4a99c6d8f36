//! Backend port for bulk operations.
//!
//! [`SubmissionGateway`] is the seam between the UI layer and whatever
//! actually performs submissions, tool runs, and moderation. The bundled
//! [`SimulatedGateway`] sleeps for a configurable delay and fabricates
//! plausible results, which is what the dashboard runs against today.
//! Swapping in an HTTP-backed implementation is a matter of implementing
//! the trait; nothing above this layer changes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{RankError, Result};
use crate::record::{AdminUser, Platform, Project, SeoTool, SubmissionReport};
use crate::status::SubmissionStatus;

/// Bulk action applied to user accounts from the admin view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Activate,
    Suspend,
    Delete,
}

impl ModerationAction {
    pub const ALL: [Self; 3] = [Self::Activate, Self::Suspend, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Suspend => "suspend",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationAction {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "activate" => Ok(Self::Activate),
            "suspend" => Ok(Self::Suspend),
            "delete" => Ok(Self::Delete),
            other => Err(RankError::unknown_value("moderation action", other)),
        }
    }
}

/// Result of one analysis tool run, as label/value pairs ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub tool_id: String,
    pub fields: Vec<(String, String)>,
}

impl ToolReport {
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The backend seam. All bulk operations the dashboard can trigger go
/// through here, so the UI layer never knows whether it is talking to the
/// simulation or a real service.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit one project to each of the given platforms. Returns the
    /// freshly created reports, one per platform, in platform order.
    async fn submit_platforms(
        &self,
        project: &Project,
        platforms: &[&Platform],
    ) -> Result<Vec<SubmissionReport>>;

    /// Run an analysis tool against a target (a URL or keyword set).
    async fn run_tool(&self, tool: &SeoTool, target: &str) -> Result<ToolReport>;

    /// Apply a moderation action to the given accounts. Returns how many
    /// were affected.
    async fn moderate_users(&self, action: ModerationAction, user_ids: &[String])
        -> Result<usize>;

    /// Render the given reports for export. Returns the serialized document
    /// (CSV); the caller decides where it goes.
    async fn export_reports(&self, reports: &[&SubmissionReport]) -> Result<String>;
}

/// How long the simulation pretends each operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub submit: Duration,
    pub tool: Duration,
    pub moderate: Duration,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            submit: Duration::from_millis(3000),
            tool: Duration::from_millis(2000),
            moderate: Duration::from_millis(1000),
        }
    }
}

/// Gateway that fakes a backend: sleeps, then fabricates results.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    delays: SimulatedDelays,
}

impl SimulatedGateway {
    pub fn new(delays: SimulatedDelays) -> Self {
        Self { delays }
    }

    /// Zero-delay variant for tests and headless runs.
    pub fn instant() -> Self {
        Self::new(SimulatedDelays {
            submit: Duration::ZERO,
            tool: Duration::ZERO,
            moderate: Duration::ZERO,
        })
    }

    fn canned_tool_report(tool: &SeoTool) -> ToolReport {
        let fields: Vec<(String, String)> = match tool.id.as_str() {
            "meta-tag-analyzer" => vec![
                ("Title".into(), "Sample Page Title - 60 characters".into()),
                (
                    "Description".into(),
                    "Sample meta description for the analyzed page".into(),
                ),
                ("Keywords".into(), "sample, keywords, found".into()),
                ("Issues".into(), "Title too long; Missing H1 tag".into()),
                ("Score".into(), "85/100".into()),
            ],
            "keyword-density" => vec![
                ("Density".into(), "2.3%".into()),
                ("Occurrences".into(), "15".into()),
                (
                    "Recommendation".into(),
                    "Keyword density is within the optimal range".into(),
                ),
            ],
            "page-speed" => vec![
                ("Score".into(), "92/100".into()),
                ("Load time".into(), "1.2s".into()),
                ("Page size".into(), "2.1 MB".into()),
                (
                    "Suggestions".into(),
                    "Optimize images; Enable compression".into(),
                ),
            ],
            _ => vec![("Status".into(), "Analysis complete".into())],
        };

        ToolReport {
            tool_id: tool.id.clone(),
            fields,
        }
    }

    fn csv_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit_platforms(
        &self,
        project: &Project,
        platforms: &[&Platform],
    ) -> Result<Vec<SubmissionReport>> {
        debug!(
            "simulating submission of '{}' to {} platform(s)",
            project.name,
            platforms.len()
        );
        tokio::time::sleep(self.delays.submit).await;

        let now = Utc::now();
        Ok(platforms
            .iter()
            .map(|platform| SubmissionReport {
                id: Uuid::new_v4().to_string(),
                project_name: project.name.clone(),
                platform_name: platform.name.clone(),
                status: SubmissionStatus::Pending,
                submitted_at: now,
                approved_at: None,
                notes: None,
                page_rank: platform.page_rank,
            })
            .collect())
    }

    async fn run_tool(&self, tool: &SeoTool, target: &str) -> Result<ToolReport> {
        debug!("simulating '{}' run against {}", tool.name, target);
        tokio::time::sleep(self.delays.tool).await;
        Ok(Self::canned_tool_report(tool))
    }

    async fn moderate_users(
        &self,
        action: ModerationAction,
        user_ids: &[String],
    ) -> Result<usize> {
        debug!("simulating {} for {} account(s)", action, user_ids.len());
        tokio::time::sleep(self.delays.moderate).await;
        Ok(user_ids.len())
    }

    async fn export_reports(&self, reports: &[&SubmissionReport]) -> Result<String> {
        let mut out = String::from("id,project,platform,status,submitted_at\n");
        for report in reports {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                Self::csv_field(&report.id),
                Self::csv_field(&report.project_name),
                Self::csv_field(&report.platform_name),
                report.status,
                report.submitted_at.to_rfc3339(),
            ));
        }
        Ok(out)
    }
}
