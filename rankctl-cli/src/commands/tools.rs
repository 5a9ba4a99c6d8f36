//! SEO analysis tool commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rankctl_core::{
    catalog, Entitlements, RankConfig, RankError, SimulatedGateway, SubmissionGateway,
    ToolCategory,
};
use tracing::info;

use crate::ui;

#[derive(Parser, Debug)]
pub struct ToolsArgs {
    #[command(subcommand)]
    pub command: ToolsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolsCommand {
    /// List available tools
    List {
        /// Only show one category (analysis, optimization, tracking, utilities)
        #[arg(long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a tool against a target URL or keyword
    Run {
        /// Tool id (see `rankctl tools list`)
        tool: String,

        /// Target URL or keyword set
        #[arg(long)]
        target: String,
    },
}

pub async fn run_tools(args: ToolsArgs) -> Result<()> {
    match args.command {
        ToolsCommand::List { category, json } => run_list(category, json),
        ToolsCommand::Run { tool, target } => run_run(tool, target).await,
    }
}

fn run_list(category: Option<String>, json: bool) -> Result<()> {
    let mut tools = catalog::tools();

    if let Some(ref raw) = category {
        let wanted: ToolCategory = raw.parse()?;
        tools.retain(|t| t.category == wanted);
    }

    if json {
        let rendered =
            serde_json::to_string_pretty(&tools).context("Failed to serialize tools")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{:<20}  {:<24}  {:<13}  {}", "ID", "NAME", "CATEGORY", "DESCRIPTION");
    for tool in &tools {
        println!(
            "{:<20}  {:<24}  {:<13}  {}",
            tool.id,
            tool.name,
            tool.category.as_str(),
            tool.description
        );
    }
    println!("\n{} tool(s)", tools.len());

    Ok(())
}

async fn run_run(tool_id: String, target: String) -> Result<()> {
    let config = RankConfig::load_or_default();
    let entitlements = Entitlements::new(config.subscription.tier);

    let tools = catalog::tools();
    let tool = tools
        .iter()
        .find(|t| t.id == tool_id)
        .ok_or_else(|| RankError::unknown_tool(&tool_id))?;

    entitlements.check_tool_access(tool)?;

    info!("running {} against {}", tool.id, target);
    let gateway = SimulatedGateway::new((&config.delays).into());
    let report = ui::with_spinner_async(
        format!("Running {} against {}...", tool.name, target),
        format!("{} finished", tool.name),
        gateway.run_tool(tool, &target),
    )
    .await?;

    println!("\n{}", report.render());

    Ok(())
}
