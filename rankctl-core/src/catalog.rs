//! Built-in seed data.
//!
//! The dashboard ships with a demo workspace so every pane has something
//! to show before a real backend is wired up: three sample projects, the
//! curated platform catalog, the fourteen analysis tools, and the admin
//! fixtures. `rankctl` hydrates its rosters from here; a persistent store
//! would replace these constructors wholesale.

use chrono::{DateTime, Utc};

use crate::record::{AdminDirectory, AdminUser, Platform, Project, SeoTool, SubmissionReport};
use crate::stats::{ActivityEntry, ActivityLevel, DirectoryPerformance, SystemStats};
use crate::status::{
    AccountStatus, PlatformKind, PlanTier, PlatformStatus, Pricing, ProjectStatus,
    SubmissionStatus, ToolCategory,
};

// Fixture literals are RFC 3339; a malformed one collapses to the epoch,
// which the catalog tests would catch immediately.
fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_default()
}

/// The three demo projects every fresh workspace starts with.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj-1".into(),
            name: "E-commerce Store".into(),
            url: "https://example-store.com".into(),
            keywords: vec!["online shopping".into(), "ecommerce".into(), "retail".into()],
            description: "Main e-commerce website for online retail business".into(),
            status: ProjectStatus::Active,
            created_at: ts("2024-01-15T10:00:00Z"),
            last_updated: ts("2024-01-20T14:30:00Z"),
        },
        Project {
            id: "proj-2".into(),
            name: "Tech Blog".into(),
            url: "https://tech-insights.blog".into(),
            keywords: vec!["technology".into(), "programming".into(), "software".into()],
            description: "Technology blog focusing on software development".into(),
            status: ProjectStatus::Active,
            created_at: ts("2024-01-10T09:15:00Z"),
            last_updated: ts("2024-01-18T16:45:00Z"),
        },
        Project {
            id: "proj-3".into(),
            name: "Local Restaurant".into(),
            url: "https://best-pizza.local".into(),
            keywords: vec!["pizza".into(), "restaurant".into(), "local dining".into()],
            description: "Local restaurant website for online ordering".into(),
            status: ProjectStatus::Paused,
            created_at: ts("2024-01-05T12:00:00Z"),
            last_updated: ts("2024-01-15T11:20:00Z"),
        },
    ]
}

struct PlatformSeed {
    id: &'static str,
    name: &'static str,
    domain: &'static str,
    kind: PlatformKind,
    category: &'static str,
    page_rank: u8,
    status: PlatformStatus,
    pricing: Pricing,
    description: &'static str,
    requirements: &'static [&'static str],
    approval_time: &'static str,
}

impl PlatformSeed {
    fn build(&self) -> Platform {
        Platform {
            id: self.id.into(),
            name: self.name.into(),
            domain: self.domain.into(),
            kind: self.kind,
            category: self.category.into(),
            page_rank: self.page_rank,
            status: self.status,
            pricing: self.pricing,
            description: self.description.into(),
            requirements: self.requirements.iter().map(|r| (*r).into()).collect(),
            approval_time: self.approval_time.into(),
        }
    }
}

const PLATFORM_SEEDS: &[PlatformSeed] = &[
    PlatformSeed {
        id: "google-my-business",
        name: "Google My Business",
        domain: "business.google.com",
        kind: PlatformKind::Directory,
        category: "Business",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Primary business listing on Google",
        requirements: &["Business verification", "Valid address"],
        approval_time: "2-3 days",
    },
    PlatformSeed {
        id: "bing-places",
        name: "Bing Places",
        domain: "www.bingplaces.com",
        kind: PlatformKind::Directory,
        category: "Business",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Microsoft Bing business directory",
        requirements: &["Business details", "Contact info"],
        approval_time: "1-2 days",
    },
    PlatformSeed {
        id: "yahoo-local",
        name: "Yahoo Local",
        domain: "local.yahoo.com",
        kind: PlatformKind::Directory,
        category: "Local",
        page_rank: 7,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Yahoo local business directory",
        requirements: &["Business category", "Description"],
        approval_time: "3-5 days",
    },
    PlatformSeed {
        id: "foursquare",
        name: "Foursquare",
        domain: "foursquare.com",
        kind: PlatformKind::Directory,
        category: "Local",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Location-based social networking",
        requirements: &["Location verification"],
        approval_time: "1-2 days",
    },
    PlatformSeed {
        id: "craigslist",
        name: "Craigslist",
        domain: "craigslist.org",
        kind: PlatformKind::Classified,
        category: "General",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Paid,
        description: "Popular classified advertisements website",
        requirements: &["Phone verification", "Local posting"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "gumtree",
        name: "Gumtree",
        domain: "gumtree.com",
        kind: PlatformKind::Classified,
        category: "General",
        page_rank: 7,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "UK-based classified ads platform",
        requirements: &["Account registration"],
        approval_time: "1-2 days",
    },
    PlatformSeed {
        id: "olx",
        name: "OLX",
        domain: "olx.com",
        kind: PlatformKind::Classified,
        category: "General",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Global online marketplace",
        requirements: &["Mobile verification"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "pr-newswire",
        name: "PR Newswire",
        domain: "prnewswire.com",
        kind: PlatformKind::Press,
        category: "News",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Paid,
        description: "Leading press release distribution service",
        requirements: &["Professional content", "Media contact"],
        approval_time: "1-3 days",
    },
    PlatformSeed {
        id: "business-wire",
        name: "Business Wire",
        domain: "businesswire.com",
        kind: PlatformKind::Press,
        category: "Business",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Paid,
        description: "Global news distribution platform",
        requirements: &["Company verification"],
        approval_time: "2-4 days",
    },
    PlatformSeed {
        id: "prlog",
        name: "PRLog",
        domain: "prlog.org",
        kind: PlatformKind::Press,
        category: "General",
        page_rank: 6,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Free press release distribution",
        requirements: &["Account registration"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "medium",
        name: "Medium",
        domain: "medium.com",
        kind: PlatformKind::Article,
        category: "Content",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Popular publishing platform",
        requirements: &["Quality content", "Author profile"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "linkedin-articles",
        name: "LinkedIn Articles",
        domain: "linkedin.com",
        kind: PlatformKind::Article,
        category: "Professional",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Professional networking platform",
        requirements: &["LinkedIn profile"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "ezinearticles",
        name: "EzineArticles",
        domain: "ezinearticles.com",
        kind: PlatformKind::Article,
        category: "General",
        page_rank: 7,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Article directory platform",
        requirements: &["Original content", "Author bio"],
        approval_time: "3-7 days",
    },
    PlatformSeed {
        id: "reddit",
        name: "Reddit",
        domain: "reddit.com",
        kind: PlatformKind::Social,
        category: "Social",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Popular social news aggregation",
        requirements: &["Active account", "Community rules"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "stumbleupon",
        name: "StumbleUpon",
        domain: "stumbleupon.com",
        kind: PlatformKind::Social,
        category: "Discovery",
        page_rank: 8,
        status: PlatformStatus::Inactive,
        pricing: Pricing::Free,
        description: "Web discovery platform",
        requirements: &["Account registration"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "digg",
        name: "Digg",
        domain: "digg.com",
        kind: PlatformKind::Social,
        category: "News",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Social news website",
        requirements: &["Quality content"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "stack-overflow",
        name: "Stack Overflow",
        domain: "stackoverflow.com",
        kind: PlatformKind::Forum,
        category: "Technology",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Programming Q&A community",
        requirements: &["Technical expertise", "Quality answers"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "quora",
        name: "Quora",
        domain: "quora.com",
        kind: PlatformKind::Forum,
        category: "General",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Question and answer platform",
        requirements: &["Helpful answers", "Profile setup"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "reddit-communities",
        name: "Reddit Communities",
        domain: "reddit.com",
        kind: PlatformKind::Forum,
        category: "Various",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Niche community discussions",
        requirements: &["Community participation"],
        approval_time: "1-2 days",
    },
    PlatformSeed {
        id: "wordpress-com",
        name: "WordPress.com",
        domain: "wordpress.com",
        kind: PlatformKind::Web2,
        category: "Blogging",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Popular blogging platform",
        requirements: &["Quality content", "Regular posting"],
        approval_time: "1-2 days",
    },
    PlatformSeed {
        id: "blogger",
        name: "Blogger",
        domain: "blogger.com",
        kind: PlatformKind::Web2,
        category: "Blogging",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Google's blogging platform",
        requirements: &["Google account"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "tumblr",
        name: "Tumblr",
        domain: "tumblr.com",
        kind: PlatformKind::Web2,
        category: "Microblogging",
        page_rank: 8,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Microblogging platform",
        requirements: &["Creative content"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "techcrunch",
        name: "TechCrunch",
        domain: "techcrunch.com",
        kind: PlatformKind::Blog,
        category: "Technology",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Leading technology blog",
        requirements: &["Relevant comments", "No spam"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "mashable",
        name: "Mashable",
        domain: "mashable.com",
        kind: PlatformKind::Blog,
        category: "Digital Culture",
        page_rank: 9,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Digital culture and tech blog",
        requirements: &["Thoughtful engagement"],
        approval_time: "1 day",
    },
    PlatformSeed {
        id: "industry-blogs",
        name: "Industry Blogs",
        domain: "various",
        kind: PlatformKind::Blog,
        category: "Industry Specific",
        page_rank: 7,
        status: PlatformStatus::Active,
        pricing: Pricing::Free,
        description: "Niche industry blogs",
        requirements: &["Industry knowledge"],
        approval_time: "1-2 days",
    },
];

/// Every submission platform across all kinds, in catalog order.
pub fn platforms() -> Vec<Platform> {
    PLATFORM_SEEDS.iter().map(PlatformSeed::build).collect()
}

/// Platforms of one kind, in catalog order.
pub fn platforms_of_kind(kind: PlatformKind) -> Vec<Platform> {
    PLATFORM_SEEDS
        .iter()
        .filter(|seed| seed.kind == kind)
        .map(PlatformSeed::build)
        .collect()
}

struct ToolSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ToolCategory,
    inputs: &'static [&'static str],
}

const TOOL_SEEDS: &[ToolSeed] = &[
    ToolSeed {
        id: "meta-tag-analyzer",
        name: "Meta Tag Analyzer",
        description: "Analyze and optimize your meta tags for better SEO performance",
        category: ToolCategory::Analysis,
        inputs: &["URL"],
    },
    ToolSeed {
        id: "keyword-density",
        name: "Keyword Density Checker",
        description: "Check keyword density and optimize content for target keywords",
        category: ToolCategory::Analysis,
        inputs: &["URL", "Target Keyword"],
    },
    ToolSeed {
        id: "sitemap-checker",
        name: "Sitemap Checker",
        description: "Validate and analyze your XML sitemap for SEO issues",
        category: ToolCategory::Analysis,
        inputs: &["Sitemap URL"],
    },
    ToolSeed {
        id: "robots-txt",
        name: "Robots.txt Generator",
        description: "Generate and validate robots.txt files for search engines",
        category: ToolCategory::Utilities,
        inputs: &["Website URL"],
    },
    ToolSeed {
        id: "index-checker",
        name: "Google Index Checker",
        description: "Check if your pages are indexed by Google search engine",
        category: ToolCategory::Tracking,
        inputs: &["URL"],
    },
    ToolSeed {
        id: "keyword-suggest",
        name: "Keyword Suggestion",
        description: "Discover new keyword opportunities for your content",
        category: ToolCategory::Optimization,
        inputs: &["Seed Keyword"],
    },
    ToolSeed {
        id: "position-checker",
        name: "Position Checker",
        description: "Track your website rankings for target keywords",
        category: ToolCategory::Tracking,
        inputs: &["URL", "Keyword", "Location"],
    },
    ToolSeed {
        id: "backlink-finder",
        name: "Backlink Finder",
        description: "Discover and analyze backlinks to your website",
        category: ToolCategory::Analysis,
        inputs: &["URL"],
    },
    ToolSeed {
        id: "domain-age",
        name: "Domain Age Checker",
        description: "Check the age and history of any domain name",
        category: ToolCategory::Utilities,
        inputs: &["Domain"],
    },
    ToolSeed {
        id: "plagiarism-checker",
        name: "Plagiarism Checker",
        description: "Check content originality and detect duplicate content",
        category: ToolCategory::Analysis,
        inputs: &["Text Content"],
    },
    ToolSeed {
        id: "page-speed",
        name: "Page Speed Checker",
        description: "Analyze website loading speed and performance metrics",
        category: ToolCategory::Optimization,
        inputs: &["URL"],
    },
    ToolSeed {
        id: "ping-website",
        name: "Ping Website",
        description: "Ping search engines to index your website faster",
        category: ToolCategory::Utilities,
        inputs: &["URL"],
    },
    ToolSeed {
        id: "url-shortener",
        name: "URL Shortener",
        description: "Create short URLs with tracking and analytics",
        category: ToolCategory::Utilities,
        inputs: &["Long URL"],
    },
    ToolSeed {
        id: "visitor-analytics",
        name: "Visitor Analytics",
        description: "Track website visitors and analyze user behavior",
        category: ToolCategory::Tracking,
        inputs: &["Website URL"],
    },
];

/// The analysis tool catalog, in display order.
pub fn tools() -> Vec<SeoTool> {
    TOOL_SEEDS
        .iter()
        .map(|seed| SeoTool {
            id: seed.id.into(),
            name: seed.name.into(),
            description: seed.description.into(),
            category: seed.category,
            inputs: seed.inputs.iter().map(|i| (*i).into()).collect(),
        })
        .collect()
}

/// Demo submission history: three projects across five platforms.
pub fn sample_reports() -> Vec<SubmissionReport> {
    vec![
        SubmissionReport {
            id: "rep-1".into(),
            project_name: "E-commerce Store".into(),
            platform_name: "Google My Business".into(),
            status: SubmissionStatus::Approved,
            submitted_at: ts("2024-01-15T10:00:00Z"),
            approved_at: Some(ts("2024-01-16T14:30:00Z")),
            notes: Some("Approved quickly, good listing quality".into()),
            page_rank: 9,
        },
        SubmissionReport {
            id: "rep-2".into(),
            project_name: "E-commerce Store".into(),
            platform_name: "Bing Places".into(),
            status: SubmissionStatus::Approved,
            submitted_at: ts("2024-01-15T10:00:00Z"),
            approved_at: Some(ts("2024-01-17T09:15:00Z")),
            notes: None,
            page_rank: 8,
        },
        SubmissionReport {
            id: "rep-3".into(),
            project_name: "Tech Blog".into(),
            platform_name: "Yahoo Local".into(),
            status: SubmissionStatus::Pending,
            submitted_at: ts("2024-01-18T16:45:00Z"),
            approved_at: None,
            notes: Some("Under review, awaiting approval".into()),
            page_rank: 7,
        },
        SubmissionReport {
            id: "rep-4".into(),
            project_name: "Local Restaurant".into(),
            platform_name: "Yelp Business".into(),
            status: SubmissionStatus::Rejected,
            submitted_at: ts("2024-01-12T12:20:00Z"),
            approved_at: None,
            notes: Some("Rejected - incomplete business information".into()),
            page_rank: 9,
        },
        SubmissionReport {
            id: "rep-5".into(),
            project_name: "Tech Blog".into(),
            platform_name: "Foursquare".into(),
            status: SubmissionStatus::Approved,
            submitted_at: ts("2024-01-14T08:30:00Z"),
            approved_at: Some(ts("2024-01-15T11:45:00Z")),
            notes: None,
            page_rank: 8,
        },
    ]
}

/// Accounts shown in the admin moderation view.
pub fn sample_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: "user-1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            plan: PlanTier::Premium,
            status: AccountStatus::Active,
            joined_at: ts("2024-01-15T00:00:00Z"),
            last_active: ts("2024-01-20T00:00:00Z"),
            projects: 12,
            submissions: 48,
        },
        AdminUser {
            id: "user-2".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            plan: PlanTier::Basic,
            status: AccountStatus::Active,
            joined_at: ts("2024-01-10T00:00:00Z"),
            last_active: ts("2024-01-19T00:00:00Z"),
            projects: 5,
            submissions: 23,
        },
        AdminUser {
            id: "user-3".into(),
            name: "Bob Wilson".into(),
            email: "bob@example.com".into(),
            plan: PlanTier::Free,
            status: AccountStatus::Suspended,
            joined_at: ts("2024-01-05T00:00:00Z"),
            last_active: ts("2024-01-18T00:00:00Z"),
            projects: 2,
            submissions: 8,
        },
    ]
}

/// Managed directories shown in the admin view.
pub fn sample_directories() -> Vec<AdminDirectory> {
    vec![
        AdminDirectory {
            id: "dir-1".into(),
            name: "Google My Business".into(),
            domain: "business.google.com".into(),
            category: "Business".into(),
            page_rank: 9,
            status: PlatformStatus::Active,
            submissions: 245,
            approval_rate: 94.2,
        },
        AdminDirectory {
            id: "dir-2".into(),
            name: "Bing Places".into(),
            domain: "www.bingplaces.com".into(),
            category: "Business".into(),
            page_rank: 8,
            status: PlatformStatus::Active,
            submissions: 189,
            approval_rate: 87.3,
        },
        AdminDirectory {
            id: "dir-3".into(),
            name: "Yahoo Local".into(),
            domain: "local.yahoo.com".into(),
            category: "Local".into(),
            page_rank: 7,
            status: PlatformStatus::Inactive,
            submissions: 156,
            approval_rate: 72.1,
        },
    ]
}

/// Platform-wide totals for the admin overview.
pub fn system_stats() -> SystemStats {
    SystemStats {
        total_users: 1247,
        active_users: 892,
        total_projects: 3456,
        total_submissions: 12847,
        revenue_usd: 24_680,
        success_rate: 86.4,
    }
}

/// The activity feed shown on the overview pane. Entries flagged
/// `premium` are blurred out for free-tier accounts.
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            message: "Optimized \"E-commerce Store\" and submitted to 5 directories".into(),
            when: "2 hours ago".into(),
            level: ActivityLevel::Success,
            premium: false,
        },
        ActivityEntry {
            message: "Keyword analysis completed for \"Tech Blog\"".into(),
            when: "4 hours ago".into(),
            level: ActivityLevel::Success,
            premium: true,
        },
        ActivityEntry {
            message: "Directory submission pending approval".into(),
            when: "6 hours ago".into(),
            level: ActivityLevel::Warning,
            premium: false,
        },
        ActivityEntry {
            message: "Detected optimization opportunity".into(),
            when: "1 day ago".into(),
            level: ActivityLevel::Info,
            premium: true,
        },
    ]
}

/// Best-performing directories for the overview pane.
pub fn top_directories() -> Vec<DirectoryPerformance> {
    vec![
        DirectoryPerformance {
            name: "Google My Business".into(),
            submissions: 45,
            approved: 42,
            score: 98,
        },
        DirectoryPerformance {
            name: "Bing Places".into(),
            submissions: 38,
            approved: 35,
            score: 95,
        },
        DirectoryPerformance {
            name: "Yahoo Local".into(),
            submissions: 32,
            approved: 28,
            score: 87,
        },
        DirectoryPerformance {
            name: "Foursquare".into(),
            submissions: 28,
            approved: 25,
            score: 92,
        },
        DirectoryPerformance {
            name: "Yelp Business".into(),
            submissions: 24,
            approved: 22,
            score: 89,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_platform_kind() {
        for kind in PlatformKind::ALL {
            let subset = platforms_of_kind(kind);
            assert!(!subset.is_empty(), "no platforms seeded for {kind}");
            assert!(subset.iter().all(|p| p.kind == kind));
        }
        assert_eq!(platforms().len(), 25);
    }

    #[test]
    fn test_tool_catalog_shape() {
        let all = tools();
        assert_eq!(all.len(), 14);
        assert!(all.iter().all(|t| !t.inputs.is_empty()));
        for category in ToolCategory::ALL {
            assert!(all.iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn test_fixture_timestamps_parse() {
        let projects = sample_projects();
        assert_eq!(projects[0].created_at, ts("2024-01-15T10:00:00Z"));
        assert_ne!(projects[0].created_at, DateTime::<Utc>::default());

        let reports = sample_reports();
        assert!(reports[0].approved_at.is_some());
        assert!(reports[2].approved_at.is_none());
    }

    #[test]
    fn test_report_fixture_statuses() {
        let reports = sample_reports();
        let approved = reports
            .iter()
            .filter(|r| r.status == SubmissionStatus::Approved)
            .count();
        assert_eq!(approved, 3);
        assert_eq!(reports.len(), 5);
    }

    #[test]
    fn test_admin_fixtures_match_overview_totals() {
        assert_eq!(sample_users().len(), 3);
        assert_eq!(sample_directories().len(), 3);

        let stats = system_stats();
        assert!(stats.active_users <= stats.total_users);

        for dir in top_directories() {
            assert!(dir.approved <= dir.submissions);
        }
    }
}
