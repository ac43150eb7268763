//! Goal Planner demo
//!
//! Runs the sample goal through all three risk tiers and prints the
//! side-by-side comparison.

use goal_planner::{GoalRequest, Planner, RiskTier, SipProjectionRequest};

fn main() {
    env_logger::init();

    println!("Goal Planner v0.1.0");
    println!("===================\n");

    // Sample goal: 1,000,000 in today's units, 10 years out, 7% inflation
    let target_corpus = 1_000_000.0;
    let years = 10;

    let planner = Planner::new();

    println!("Goal: {:.0} today over {} years", target_corpus, years);
    println!(
        "{:>10} {:>8} {:>16} {:>14} {:>14}",
        "Tier", "Return", "InflatedTarget", "MonthlySIP", "Lumpsum"
    );
    println!("{}", "-".repeat(66));

    for tier in RiskTier::ALL {
        let request = GoalRequest::new(target_corpus, tier, years, None)
            .expect("sample inputs are valid");
        let plan = planner.plan_goal(&request);

        println!(
            "{:>10} {:>7.1}% {:>16.0} {:>14.0} {:>14.0}",
            tier.as_str(),
            plan.inputs.assumed_return * 100.0,
            plan.outputs.inflation_adjusted_target_fv,
            plan.outputs.estimated_monthly_sip,
            plan.outputs.estimated_lumpsum,
        );
    }

    // Reverse view: what a fixed 10,000/month SIP reaches per tier
    let monthly_sip = 10_000.0;
    let horizon = 15;

    println!("\nProjection: {:.0}/month over {} years", monthly_sip, horizon);
    println!("{:>10} {:>8} {:>16}", "Tier", "Return", "ProjectedFV");
    println!("{}", "-".repeat(36));

    for tier in RiskTier::ALL {
        let request = SipProjectionRequest::new(monthly_sip, tier, horizon)
            .expect("sample inputs are valid");
        let projection = planner.project_sip(&request);

        println!(
            "{:>10} {:>7.1}% {:>16.0}",
            tier.as_str(),
            projection.inputs.assumed_return * 100.0,
            projection.outputs.projected_corpus_fv,
        );
    }
}
