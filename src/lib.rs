//! Goal Planner - deterministic SIP/lumpsum goal planning under inflation
//!
//! This library provides:
//! - Inflation adjustment of present-day goals to a nominal future target
//! - Required monthly SIP and one-time lumpsum solving for a target corpus
//! - Corpus projection from a recurring SIP or a single lumpsum deposit
//! - Risk-tiered nominal return assumptions (low/moderate/high)

pub mod assumptions;
pub mod formulas;
pub mod planner;

// Re-export commonly used types
pub use assumptions::{Assumptions, ReturnAssumptions, RiskTier, DEFAULT_INFLATION};
pub use planner::{
    GoalPlan, GoalRequest, InputError, LumpsumProjection, LumpsumProjectionRequest, Planner,
    SipProjection, SipProjectionRequest,
};
