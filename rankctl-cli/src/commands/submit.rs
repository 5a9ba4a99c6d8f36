//! Headless directory submission
//!
//! Runs the dashboard's submission flow without the TUI: the platform
//! catalog goes through the same roster filtering, the batch is checked
//! against the active plan's monthly quota, and the gateway call produces
//! one pending report per platform.

use anyhow::{Context, Result};
use clap::Parser;
use rankctl_core::{
    catalog, Entitlements, Facet, Platform, PlatformKind, Project, RankConfig, RankError,
    Roster, SimulatedGateway, SubmissionGateway,
};
use tracing::info;

use crate::ui;

#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Project to submit (id or name, see `rankctl projects list`)
    #[arg(long)]
    pub project: String,

    /// Platform kind (directory, classified, press, article, social, forum, web2, blog)
    #[arg(long, default_value = "directory")]
    pub kind: String,

    /// Narrow the batch to platforms matching this search term
    #[arg(long)]
    pub search: Option<String>,

    /// Narrow the batch to one platform category
    #[arg(long)]
    pub category: Option<String>,

    /// Platform ids to submit to (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub platforms: Vec<String>,

    /// Submit to every platform matching the filters
    #[arg(long)]
    pub all: bool,

    /// Output the created reports as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_submit(args: SubmitArgs) -> Result<()> {
    let config = RankConfig::load_or_default();
    let entitlements = Entitlements::new(config.subscription.tier);

    let project = find_project(&args.project)?;
    let kind: PlatformKind = args.kind.parse()?;

    let mut roster = Roster::new(catalog::platforms_of_kind(kind));
    if let Some(ref term) = args.search {
        roster.set_search(term.clone());
    }
    if let Some(ref cat) = args.category {
        roster.set_category(Facet::value(cat.clone()));
    }

    if args.all {
        roster.select_all_visible();
    } else {
        for id in &args.platforms {
            roster
                .toggle(id)
                .with_context(|| format!("No {} platform with id '{}'", kind, id))?;
        }
    }

    let selected: Vec<&Platform> = roster
        .visible()
        .into_iter()
        .filter(|p| roster.selection().contains(&p.id))
        .collect();
    if selected.is_empty() {
        return Err(RankError::empty_selection("submit").into());
    }

    entitlements.check_submission_quota(0, selected.len())?;

    info!(
        "submitting '{}' to {} {} platform(s)",
        project.name,
        selected.len(),
        kind
    );
    let gateway = SimulatedGateway::new((&config.delays).into());
    let reports = ui::with_spinner_async(
        format!(
            "Submitting '{}' to {} platform(s)...",
            project.name,
            selected.len()
        ),
        format!("Submitted '{}' to {} platform(s)", project.name, selected.len()),
        gateway.submit_platforms(&project, &selected),
    )
    .await?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!();
    println!("{:<24}  {:<9}  {:<4}  {}", "PLATFORM", "STATUS", "PR", "REPORT ID");
    for report in &reports {
        println!(
            "{:<24}  {:<9}  {:<4}  {}",
            report.platform_name,
            report.status.as_str(),
            report.page_rank,
            report.id
        );
    }
    println!("\n{} report(s) created, pending approval", reports.len());

    Ok(())
}

/// Look a project up by id, then by case-insensitive name.
fn find_project(needle: &str) -> Result<Project> {
    let projects = catalog::sample_projects();
    projects
        .iter()
        .find(|p| p.id == needle)
        .or_else(|| {
            projects
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(needle))
        })
        .cloned()
        .ok_or_else(|| RankError::unknown_record(needle).into())
}
