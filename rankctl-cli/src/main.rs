//! rankctl CLI - SEO project dashboard and submission tooling
//!
//! This is the main entry point for the rankctl command-line tool, which provides:
//! - Interactive dashboard TUI (`dash` subcommand)
//! - Project management (`projects` subcommand)
//! - Directory submission from the command line (`submit` subcommand)
//! - SEO analysis tools (`tools` subcommand)
//! - Submission report summaries and CSV export (`reports` subcommand)
//! - Plan and pricing information (`plans` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rankctl_core::{PlanTier, RankConfig, RetentionPolicy};
use tracing_subscriber::EnvFilter;

mod commands;
mod tui;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "rankctl",
    author,
    version,
    about = "SEO project dashboard: directory submission, analysis tools, and reports",
    long_about = "Manage SEO projects from the terminal. Browse submission platforms, \
                  run analysis tools, and track submission reports, with the same \
                  search, facet, and bulk-selection workflow in every view."
)]
struct Cli {
    /// Suppress progress spinners and bars (for LLM/script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard TUI
    Dash(DashArgs),
    /// Manage SEO projects (list, add, rm)
    Projects(commands::projects::ProjectsArgs),
    /// Submit a project to directory platforms
    Submit(commands::submit::SubmitArgs),
    /// Browse and run SEO analysis tools
    Tools(commands::tools::ToolsArgs),
    /// Summarize and export submission reports
    Reports(commands::reports::ReportsArgs),
    /// Show subscription plans and the active tier
    Plans(commands::plans::PlansArgs),
    /// Manage rankctl configuration (init, show, path)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct DashArgs {
    /// Override the subscription tier from config
    #[arg(long, value_enum)]
    tier: Option<TierArg>,

    /// Override what happens to selected-but-hidden rows on filter change
    #[arg(long, value_enum)]
    retention: Option<RetentionArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum TierArg {
    Free,
    Basic,
    Premium,
}

impl From<TierArg> for PlanTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Free => PlanTier::Free,
            TierArg::Basic => PlanTier::Basic,
            TierArg::Premium => PlanTier::Premium,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RetentionArg {
    Retain,
    Prune,
}

impl From<RetentionArg> for RetentionPolicy {
    fn from(arg: RetentionArg) -> Self {
        match arg {
            RetentionArg::Retain => RetentionPolicy::Retain,
            RetentionArg::Prune => RetentionPolicy::Prune,
        }
    }
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    // Initialize UI quiet mode from flag, env var, and TTY detection
    ui::init_quiet_mode(cli.quiet);

    match cli.command {
        Commands::Dash(args) => run_dash(args).await?,
        Commands::Projects(args) => commands::run_projects(args)?,
        Commands::Submit(args) => commands::run_submit(args).await?,
        Commands::Tools(args) => commands::run_tools(args).await?,
        Commands::Reports(args) => commands::run_reports(args).await?,
        Commands::Plans(args) => commands::run_plans(args)?,
        Commands::Config(args) => commands::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

async fn run_dash(args: DashArgs) -> Result<()> {
    let mut config = RankConfig::load_or_default();
    if let Some(tier) = args.tier {
        config.subscription.tier = tier.into();
    }
    if let Some(retention) = args.retention {
        config.behavior.selection_retention = retention.into();
    }
    tui::run(config).await
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
