//! Subscription plan listing

use anyhow::{Context, Result};
use clap::Parser;
use rankctl_core::{plan::plans, RankConfig};

#[derive(Parser, Debug)]
pub struct PlansArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_plans(args: PlansArgs) -> Result<()> {
    let config = RankConfig::load_or_default();
    let active = config.subscription.tier;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(plans()).context("Failed to serialize plans")?;
        println!("{}", rendered);
        return Ok(());
    }

    for plan in plans() {
        let marker = if plan.tier == active { "→" } else { " " };
        let popular = if plan.popular { "  ★ popular" } else { "" };
        println!(
            "{} {:<10} ${}/mo  projects: {:<10} submissions/mo: {:<10}{}",
            marker,
            plan.name,
            plan.price_usd,
            plan.limits.projects.to_string(),
            plan.limits.submissions_per_month.to_string(),
            popular
        );
        for feature in &plan.features {
            println!("      - {}", feature);
        }
        println!();
    }
    println!("Active tier: {} (set under [subscription] in the config file)", active.as_str());

    Ok(())
}
