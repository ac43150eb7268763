//! Planner facade combining assumptions and formulas into response objects
//!
//! Results echo the normalized inputs next to the derived outputs, matching
//! the wire shape of the API. Monetary outputs are rounded to whole units and
//! echoed amounts to two decimals here, at the boundary only.

use serde::Serialize;

use crate::assumptions::{Assumptions, RiskTier};
use crate::formulas::{
    future_value_of_lumpsum, future_value_of_sip, inflate_goal, lumpsum_required, sip_required,
};
use crate::planner::request::{GoalRequest, LumpsumProjectionRequest, SipProjectionRequest};

/// Echoed inputs of a goal plan
#[derive(Debug, Clone, Serialize)]
pub struct GoalPlanInputs {
    pub target_corpus_today: f64,
    pub risk_level: RiskTier,
    pub years: u32,
    pub assumed_inflation: f64,
    pub assumed_return: f64,
}

/// Derived outputs of a goal plan, rounded to whole units
#[derive(Debug, Clone, Serialize)]
pub struct GoalPlanOutputs {
    pub inflation_adjusted_target_fv: f64,
    pub estimated_monthly_sip: f64,
    pub estimated_lumpsum: f64,
}

/// Result of the goal → SIP/lumpsum calculation
#[derive(Debug, Clone, Serialize)]
pub struct GoalPlan {
    pub inputs: GoalPlanInputs,
    pub outputs: GoalPlanOutputs,
}

/// Echoed inputs of a SIP projection
#[derive(Debug, Clone, Serialize)]
pub struct SipProjectionInputs {
    pub monthly_sip: f64,
    pub risk_level: RiskTier,
    pub years: u32,
    pub assumed_return: f64,
}

/// Echoed inputs of a lumpsum projection
#[derive(Debug, Clone, Serialize)]
pub struct LumpsumProjectionInputs {
    pub lumpsum: f64,
    pub risk_level: RiskTier,
    pub years: u32,
    pub assumed_return: f64,
}

/// Projected corpus, rounded to whole units
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionOutputs {
    pub projected_corpus_fv: f64,
}

/// Result of the SIP → corpus projection
#[derive(Debug, Clone, Serialize)]
pub struct SipProjection {
    pub inputs: SipProjectionInputs,
    pub outputs: ProjectionOutputs,
}

/// Result of the lumpsum → corpus projection
#[derive(Debug, Clone, Serialize)]
pub struct LumpsumProjection {
    pub inputs: LumpsumProjectionInputs,
    pub outputs: ProjectionOutputs,
}

/// Round a derived monetary output to whole units for display
fn round_unit(value: f64) -> f64 {
    value.round()
}

/// Round an echoed amount to two decimals for display
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateless calculator over a fixed set of assumptions
///
/// Holds the immutable return table and inflation default; every operation is
/// a pure function of the request, safe to call from any number of callers.
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    assumptions: Assumptions,
}

impl Planner {
    /// Create a planner with the default pricing assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_pricing(),
        }
    }

    /// Create a planner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Inflation-adjust the goal, then solve for the monthly SIP and the
    /// one-time lumpsum that reach it under the tier's assumed return
    pub fn plan_goal(&self, req: &GoalRequest) -> GoalPlan {
        let annual_return = self.assumptions.returns.annual_return(req.risk_level);
        let inflated_goal = inflate_goal(req.target_corpus, req.years, req.inflation);
        let sip = sip_required(inflated_goal, annual_return, req.years);
        let lumpsum = lumpsum_required(inflated_goal, annual_return, req.years);

        GoalPlan {
            inputs: GoalPlanInputs {
                target_corpus_today: round_cents(req.target_corpus),
                risk_level: req.risk_level,
                years: req.years,
                assumed_inflation: req.inflation,
                assumed_return: annual_return,
            },
            outputs: GoalPlanOutputs {
                inflation_adjusted_target_fv: round_unit(inflated_goal),
                estimated_monthly_sip: round_unit(sip),
                estimated_lumpsum: round_unit(lumpsum),
            },
        }
    }

    /// Project the corpus reached by a recurring monthly SIP
    pub fn project_sip(&self, req: &SipProjectionRequest) -> SipProjection {
        let annual_return = self.assumptions.returns.annual_return(req.risk_level);
        let fv = future_value_of_sip(req.monthly_sip, annual_return, req.years);

        SipProjection {
            inputs: SipProjectionInputs {
                monthly_sip: round_cents(req.monthly_sip),
                risk_level: req.risk_level,
                years: req.years,
                assumed_return: annual_return,
            },
            outputs: ProjectionOutputs {
                projected_corpus_fv: round_unit(fv),
            },
        }
    }

    /// Project the corpus reached by a single deposit
    pub fn project_lumpsum(&self, req: &LumpsumProjectionRequest) -> LumpsumProjection {
        let annual_return = self.assumptions.returns.annual_return(req.risk_level);
        let fv = future_value_of_lumpsum(req.lumpsum, annual_return, req.years);

        LumpsumProjection {
            inputs: LumpsumProjectionInputs {
                lumpsum: round_cents(req.lumpsum),
                risk_level: req.risk_level,
                years: req.years,
                assumed_return: annual_return,
            },
            outputs: ProjectionOutputs {
                projected_corpus_fv: round_unit(fv),
            },
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
