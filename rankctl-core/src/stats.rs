//! Aggregates derived from submission history, plus the admin overview
//! figures.

use serde::{Deserialize, Serialize};

use crate::record::SubmissionReport;
use crate::status::SubmissionStatus;

/// Counts and success rate over a slice of submission reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    /// Approved share of all reports, rounded to a whole percent.
    pub success_rate: u32,
}

impl ReportStats {
    pub fn collect(reports: &[SubmissionReport]) -> Self {
        let mut stats = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            match report.status {
                SubmissionStatus::Approved => stats.approved += 1,
                SubmissionStatus::Pending => stats.pending += 1,
                SubmissionStatus::Rejected => stats.rejected += 1,
            }
        }
        if stats.total > 0 {
            stats.success_rate =
                ((stats.approved as f64 / stats.total as f64) * 100.0).round() as u32;
        }
        stats
    }
}

/// Platform-wide totals shown on the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_projects: u32,
    pub total_submissions: u32,
    pub revenue_usd: u64,
    pub success_rate: f64,
}

/// Severity bucket for activity feed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Success,
    Warning,
    Error,
    Info,
}

/// One line in the overview activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub message: String,
    /// Relative age, e.g. "2 hours ago"
    pub when: String,
    pub level: ActivityLevel,
    /// Hidden behind an upgrade notice on the free tier
    pub premium: bool,
}

/// Per-directory submission outcomes for the overview leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPerformance {
    pub name: String,
    pub submissions: u32,
    pub approved: u32,
    /// Quality score out of 100
    pub score: u8,
}

impl DirectoryPerformance {
    /// Approved share, 0.0 when nothing was submitted.
    pub fn approval_ratio(&self) -> f64 {
        if self.submissions == 0 {
            0.0
        } else {
            f64::from(self.approved) / f64::from(self.submissions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_collect_counts_each_status() {
        let stats = ReportStats::collect(&catalog::sample_reports());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.approved, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.success_rate, 60);
    }

    #[test]
    fn test_collect_on_empty_slice_is_all_zero() {
        let stats = ReportStats::collect(&[]);
        assert_eq!(stats, ReportStats::default());
    }

    #[test]
    fn test_success_rate_rounds_to_nearest_percent() {
        let mut reports = catalog::sample_reports();
        reports.truncate(3); // approved, approved, pending
        let stats = ReportStats::collect(&reports);
        assert_eq!(stats.success_rate, 67);
    }

    #[test]
    fn test_approval_ratio_handles_zero_submissions() {
        let perf = DirectoryPerformance {
            name: "Empty".into(),
            submissions: 0,
            approved: 0,
            score: 0,
        };
        assert_eq!(perf.approval_ratio(), 0.0);

        let top = catalog::top_directories();
        assert!(top[0].approval_ratio() > 0.9);
    }
}
