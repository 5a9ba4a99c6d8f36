//! Project management commands
//!
//! The roster is seeded with the demo catalog and lives for one invocation;
//! there is no backing store. What matters here is the plan gate: `add`
//! refuses once the active tier's project quota is used up, with the same
//! error the dashboard surfaces.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rankctl_core::{catalog, Entitlements, Plan, Project, RankConfig, Roster};

#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List projects
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a project (gated by the active plan's project quota)
    Add {
        /// Project name
        name: String,

        /// Site URL
        #[arg(long)]
        url: String,

        /// Target keywords (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "")]
        keywords: Vec<String>,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove a project by id
    Rm {
        /// Project id (see `rankctl projects list`)
        id: String,
    },
}

pub fn run_projects(args: ProjectsArgs) -> Result<()> {
    let config = RankConfig::load_or_default();
    let entitlements = Entitlements::new(config.subscription.tier);
    let mut roster = Roster::new(catalog::sample_projects());

    match args.command {
        ProjectsCommand::List { json } => {
            if json {
                let rendered = serde_json::to_string_pretty(roster.records())
                    .context("Failed to serialize projects")?;
                println!("{}", rendered);
            } else {
                print_project_table(&roster, entitlements.plan());
            }
        }
        ProjectsCommand::Add {
            name,
            url,
            keywords,
            description,
        } => {
            entitlements.check_project_quota(roster.len())?;

            let keywords: Vec<String> =
                keywords.into_iter().filter(|k| !k.is_empty()).collect();
            let project = Project::new(name, url, keywords, description);
            let created = project.name.clone();
            let id = project.id.clone();
            roster.push(project).context("Failed to add project")?;

            println!("✓ Created project: {} ({})", created, id);
            print_project_table(&roster, entitlements.plan());
        }
        ProjectsCommand::Rm { id } => {
            let removed = roster.remove(&id)?;
            println!("✓ Removed project: {} ({})", removed.name, removed.id);
            print_project_table(&roster, entitlements.plan());
        }
    }

    Ok(())
}

fn print_project_table(roster: &Roster<Project>, plan: &Plan) {
    println!(
        "{:<38}  {:<20}  {:<9}  {}",
        "ID", "NAME", "STATUS", "URL"
    );
    for project in roster.records() {
        println!(
            "{:<38}  {:<20}  {:<9}  {}",
            project.id,
            project.name,
            project.status.as_str(),
            project.url
        );
    }
    println!(
        "\n{} of {} projects used ({} plan)",
        roster.len(),
        plan.limits.projects,
        plan.tier.as_str()
    );
}
