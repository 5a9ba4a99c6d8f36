pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
#[cfg(feature = "rt")]
pub mod gateway;
pub mod plan;
pub mod record;
pub mod roster;
pub mod selection;
pub mod stats;
pub mod status;

pub use config::RankConfig;
pub use dispatch::{DispatchEvent, DispatchFlag, DispatchGuard};
#[cfg(feature = "rt")]
pub use dispatch::Dispatcher;
pub use error::{RankError, Result};
pub use filter::{Facet, FilterState};
#[cfg(feature = "rt")]
pub use gateway::{
    ModerationAction, SimulatedDelays, SimulatedGateway, SubmissionGateway, ToolReport,
};
pub use plan::{Entitlements, Limit, Plan, PlanLimits};
pub use record::{AdminDirectory, AdminUser, Platform, Project, Record, SeoTool, SubmissionReport};
pub use roster::Roster;
pub use selection::{RetentionPolicy, SelectionSet};
pub use stats::{ActivityEntry, ActivityLevel, DirectoryPerformance, ReportStats, SystemStats};
pub use status::{
    AccountStatus, PlanTier, PlatformKind, PlatformStatus, Pricing, ProjectStatus,
    SubmissionStatus, ToolCategory,
};
