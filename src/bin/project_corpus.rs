//! Corpus projection CLI
//!
//! Reverse calculation: given a recurring monthly SIP and/or a one-time
//! lumpsum, project the corpus reached over the horizon under the risk
//! tier's assumed return. Supports JSON output via --json flag.

use anyhow::{bail, Result};
use clap::Parser;
use goal_planner::{
    planner::parse_risk_level, LumpsumProjectionRequest, Planner, SipProjectionRequest,
};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "project_corpus", about = "Project the corpus reached by a contribution")]
struct Args {
    /// Recurring monthly contribution
    #[arg(long)]
    monthly_sip: Option<f64>,

    /// One-time deposit
    #[arg(long)]
    lumpsum: Option<f64>,

    /// Risk tier: low, moderate, or high
    #[arg(long)]
    risk_level: String,

    /// Time horizon in whole years
    #[arg(long)]
    years: u32,

    /// Emit the results as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.monthly_sip.is_none() && args.lumpsum.is_none() {
        bail!("provide --monthly-sip and/or --lumpsum");
    }

    let risk_level = parse_risk_level(Some(&args.risk_level))?;
    let planner = Planner::new();

    let sip_projection = args
        .monthly_sip
        .map(|amount| SipProjectionRequest::new(amount, risk_level, args.years))
        .transpose()?
        .map(|req| planner.project_sip(&req));

    let lumpsum_projection = args
        .lumpsum
        .map(|amount| LumpsumProjectionRequest::new(amount, risk_level, args.years))
        .transpose()?
        .map(|req| planner.project_lumpsum(&req));

    if args.json {
        let body = json!({
            "sip": sip_projection,
            "lumpsum": lumpsum_projection,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Corpus Projection");
    println!("=================\n");
    println!("  Risk level:       {:>14}", risk_level.as_str());
    println!("  Horizon:          {:>11} yrs", args.years);

    if let Some(projection) = &sip_projection {
        println!();
        println!("  Monthly SIP:      {:>14.2}", projection.inputs.monthly_sip);
        println!(
            "  Projected corpus: {:>14.0}",
            projection.outputs.projected_corpus_fv
        );
    }

    if let Some(projection) = &lumpsum_projection {
        println!();
        println!("  Lumpsum:          {:>14.2}", projection.inputs.lumpsum);
        println!(
            "  Projected corpus: {:>14.0}",
            projection.outputs.projected_corpus_fv
        );
    }

    Ok(())
}
