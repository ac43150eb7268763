//! Goal planning CLI
//!
//! Solves the monthly SIP and one-time lumpsum needed to reach an
//! inflation-adjusted target corpus. Supports JSON output for API
//! integration via --json flag.

use anyhow::Result;
use clap::Parser;
use goal_planner::{planner::parse_risk_level, GoalRequest, Planner};

#[derive(Parser, Debug)]
#[command(name = "plan_goal", about = "Solve the SIP and lumpsum required for a goal")]
struct Args {
    /// Goal amount in today's units
    #[arg(long)]
    target_corpus: f64,

    /// Risk tier: low, moderate, or high
    #[arg(long)]
    risk_level: String,

    /// Time horizon in whole years
    #[arg(long)]
    years: u32,

    /// Assumed annual inflation as a decimal (default 0.07)
    #[arg(long)]
    inflation: Option<f64>,

    /// Emit the result as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let risk_level = parse_risk_level(Some(&args.risk_level))?;
    let request = GoalRequest::new(args.target_corpus, risk_level, args.years, args.inflation)?;

    let plan = Planner::new().plan_goal(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Goal Plan");
    println!("=========\n");
    println!("  Target today:     {:>14.2}", plan.inputs.target_corpus_today);
    println!("  Risk level:       {:>14}", plan.inputs.risk_level.as_str());
    println!("  Horizon:          {:>11} yrs", plan.inputs.years);
    println!("  Inflation:        {:>13.1}%", plan.inputs.assumed_inflation * 100.0);
    println!("  Assumed return:   {:>13.1}%", plan.inputs.assumed_return * 100.0);
    println!();
    println!("  Inflated target:  {:>14.0}", plan.outputs.inflation_adjusted_target_fv);
    println!("  Monthly SIP:      {:>14.0}", plan.outputs.estimated_monthly_sip);
    println!("  Lumpsum today:    {:>14.0}", plan.outputs.estimated_lumpsum);

    Ok(())
}
