//! Submission report commands
//!
//! Both subcommands run the same search and status predicates the dashboard
//! uses, so a filtered export contains exactly the rows a filtered view
//! shows.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rankctl_core::{
    catalog, Facet, ReportStats, Roster, SimulatedGateway, SubmissionGateway,
    SubmissionReport, SubmissionStatus,
};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub command: ReportsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// Show reports with summary stats
    Show {
        #[command(flatten)]
        filter: FilterOpts,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export reports to a CSV file
    Export {
        #[command(flatten)]
        filter: FilterOpts,

        /// Output file path
        #[arg(long = "out", value_name = "PATH", default_value = "reports.csv")]
        out: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct FilterOpts {
    /// Only show one status (approved, pending, rejected)
    #[arg(long)]
    pub status: Option<String>,

    /// Search term matched against project and platform names
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn run_reports(args: ReportsArgs) -> Result<()> {
    match args.command {
        ReportsCommand::Show { filter, json } => run_show(filter, json),
        ReportsCommand::Export { filter, out } => run_export(filter, out).await,
    }
}

fn filtered_roster(opts: &FilterOpts) -> Result<Roster<SubmissionReport>> {
    let mut roster = Roster::new(catalog::sample_reports());

    if let Some(ref raw) = opts.status {
        let status: SubmissionStatus = raw.parse()?;
        roster.set_status(Facet::value(status.as_str()));
    }
    if let Some(ref term) = opts.search {
        roster.set_search(term.clone());
    }

    Ok(roster)
}

fn run_show(opts: FilterOpts, json: bool) -> Result<()> {
    let roster = filtered_roster(&opts)?;
    let stats = ReportStats::collect(roster.records());
    let visible = roster.visible();

    if json {
        let rendered = serde_json::to_string_pretty(&visible)
            .context("Failed to serialize reports")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "Total: {}   Approved: {}   Pending: {}   Rejected: {}   Success rate: {}%",
        stats.total, stats.approved, stats.pending, stats.rejected, stats.success_rate
    );
    println!();
    println!(
        "{:<8}  {:<18}  {:<22}  {:<9}  {:<12}  {}",
        "ID", "PROJECT", "PLATFORM", "STATUS", "SUBMITTED", "PR"
    );
    for report in &visible {
        println!(
            "{:<8}  {:<18}  {:<22}  {:<9}  {:<12}  {}",
            report.id,
            report.project_name,
            report.platform_name,
            report.status.as_str(),
            report.submitted_at.format("%Y-%m-%d"),
            report.page_rank
        );
    }
    println!("\n{} of {} report(s) shown", visible.len(), roster.len());

    Ok(())
}

async fn run_export(opts: FilterOpts, out: PathBuf) -> Result<()> {
    let roster = filtered_roster(&opts)?;
    let visible = roster.visible();
    let count = visible.len();

    info!("exporting {} report(s) to {:?}", count, out);
    let gateway = SimulatedGateway::instant();
    let csv = gateway.export_reports(&visible).await?;

    fs::write(&out, csv).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("✓ Exported {} report(s) to {}", count, out.display());

    Ok(())
}
