//! Subscription plans and the quota checks they imply.
//!
//! The three tiers mirror the public pricing page. [`Entitlements`] wraps
//! a tier and answers the only questions the rest of the app ever asks:
//! can this account add another project, push another batch of
//! submissions, or run this tool.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::record::SeoTool;
use crate::status::{PlanTier, ToolCategory};

/// A quota that is either a hard cap or uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    Finite(u32),
    Unlimited,
}

impl Limit {
    /// Whether one more unit fits on top of `used`.
    pub fn allows(&self, used: usize) -> bool {
        match self {
            Self::Finite(cap) => used < *cap as usize,
            Self::Unlimited => true,
        }
    }

    /// Whether `used + requested` stays within the cap.
    pub fn allows_batch(&self, used: usize, requested: usize) -> bool {
        match self {
            Self::Finite(cap) => used.saturating_add(requested) <= *cap as usize,
            Self::Unlimited => true,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(cap) => write!(f, "{cap}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Hard caps attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub projects: Limit,
    pub submissions_per_month: Limit,
    /// When false only analysis-category tools may run.
    pub all_tools: bool,
}

/// One subscription tier as shown on the pricing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: String,
    pub price_usd: u32,
    pub popular: bool,
    pub limits: PlanLimits,
    pub features: Vec<String>,
}

static PLANS: Lazy<Vec<Plan>> = Lazy::new(|| {
    vec![
        Plan {
            tier: PlanTier::Free,
            name: "Free".into(),
            price_usd: 0,
            popular: false,
            limits: PlanLimits {
                projects: Limit::Finite(5),
                submissions_per_month: Limit::Finite(10),
                all_tools: false,
            },
            features: vec![
                "5 SEO Projects".into(),
                "10 Directory Submissions/month".into(),
                "Basic SEO Tools".into(),
                "Email Support".into(),
            ],
        },
        Plan {
            tier: PlanTier::Basic,
            name: "Basic".into(),
            price_usd: 29,
            popular: true,
            limits: PlanLimits {
                projects: Limit::Finite(25),
                submissions_per_month: Limit::Finite(100),
                all_tools: true,
            },
            features: vec![
                "25 SEO Projects".into(),
                "100 Directory Submissions/month".into(),
                "All SEO Tools".into(),
                "Priority Email Support".into(),
                "Submission Reports".into(),
            ],
        },
        Plan {
            tier: PlanTier::Premium,
            name: "Premium".into(),
            price_usd: 99,
            popular: false,
            limits: PlanLimits {
                projects: Limit::Unlimited,
                submissions_per_month: Limit::Unlimited,
                all_tools: true,
            },
            features: vec![
                "Unlimited SEO Projects".into(),
                "Unlimited Directory Submissions".into(),
                "All SEO Tools + API Access".into(),
                "24/7 Priority Support".into(),
                "Advanced Analytics".into(),
                "White-label Reports".into(),
            ],
        },
    ]
});

/// All plans in pricing-page order (free, basic, premium).
pub fn plans() -> &'static [Plan] {
    &PLANS
}

impl Plan {
    pub fn for_tier(tier: PlanTier) -> &'static Plan {
        // PLANS covers every PlanTier variant, so the lookup cannot miss.
        PLANS
            .iter()
            .find(|plan| plan.tier == tier)
            .unwrap_or(&PLANS[0])
    }
}

/// Quota checks for one account's tier.
#[derive(Debug, Clone, Copy)]
pub struct Entitlements {
    tier: PlanTier,
}

impl Entitlements {
    pub fn new(tier: PlanTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> PlanTier {
        self.tier
    }

    pub fn plan(&self) -> &'static Plan {
        Plan::for_tier(self.tier)
    }

    /// Room for one more project on top of `existing`.
    pub fn check_project_quota(&self, existing: usize) -> Result<()> {
        let limit = self.plan().limits.projects;
        match limit {
            Limit::Finite(cap) if !limit.allows(existing) => {
                Err(RankError::plan_limit(self.tier.as_str(), "projects", cap))
            }
            _ => Ok(()),
        }
    }

    /// Room for `requested` more submissions on top of `used` this month.
    pub fn check_submission_quota(&self, used: usize, requested: usize) -> Result<()> {
        let limit = self.plan().limits.submissions_per_month;
        match limit {
            Limit::Finite(cap) if !limit.allows_batch(used, requested) => Err(
                RankError::plan_limit(self.tier.as_str(), "submissions per month", cap),
            ),
            _ => Ok(()),
        }
    }

    /// Free accounts only get the analysis tools; everything else needs a
    /// paid tier.
    pub fn check_tool_access(&self, tool: &SeoTool) -> Result<()> {
        if self.plan().limits.all_tools || tool.category == ToolCategory::Analysis {
            Ok(())
        } else {
            Err(RankError::config(format!(
                "'{}' is not included in the {} plan; upgrade to run {} tools",
                tool.name,
                self.tier,
                tool.category
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_plans_cover_every_tier_in_order() {
        let tiers: Vec<PlanTier> = plans().iter().map(|p| p.tier).collect();
        assert_eq!(tiers, vec![PlanTier::Free, PlanTier::Basic, PlanTier::Premium]);
        assert!(Plan::for_tier(PlanTier::Basic).popular);
        assert_eq!(Plan::for_tier(PlanTier::Premium).price_usd, 99);
    }

    #[test]
    fn test_project_quota_enforced_on_free_tier() {
        let free = Entitlements::new(PlanTier::Free);
        assert!(free.check_project_quota(4).is_ok());

        let err = free.check_project_quota(5).unwrap_err();
        assert!(err.to_string().contains("free"));
        assert!(err.to_string().contains('5'));

        let premium = Entitlements::new(PlanTier::Premium);
        assert!(premium.check_project_quota(10_000).is_ok());
    }

    #[test]
    fn test_submission_quota_counts_the_whole_batch() {
        let free = Entitlements::new(PlanTier::Free);
        assert!(free.check_submission_quota(0, 10).is_ok());
        assert!(free.check_submission_quota(8, 2).is_ok());
        assert!(free.check_submission_quota(8, 3).is_err());

        let basic = Entitlements::new(PlanTier::Basic);
        assert!(basic.check_submission_quota(90, 10).is_ok());
        assert!(basic.check_submission_quota(95, 10).is_err());
    }

    #[test]
    fn test_free_tier_is_limited_to_analysis_tools() {
        let free = Entitlements::new(PlanTier::Free);
        let tools = catalog::tools();

        let analyzer = tools.iter().find(|t| t.id == "meta-tag-analyzer").unwrap();
        assert!(free.check_tool_access(analyzer).is_ok());

        let speed = tools.iter().find(|t| t.id == "page-speed").unwrap();
        assert!(free.check_tool_access(speed).is_err());

        let basic = Entitlements::new(PlanTier::Basic);
        assert!(basic.check_tool_access(speed).is_ok());
    }

    #[test]
    fn test_limit_display() {
        assert_eq!(Limit::Finite(25).to_string(), "25");
        assert_eq!(Limit::Unlimited.to_string(), "unlimited");
    }
}
