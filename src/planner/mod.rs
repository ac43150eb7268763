//! Request validation and plan construction

mod calculator;
mod request;

pub use calculator::{
    GoalPlan, GoalPlanInputs, GoalPlanOutputs, LumpsumProjection, LumpsumProjectionInputs,
    Planner, ProjectionOutputs, SipProjection, SipProjectionInputs,
};
pub use request::{
    parse_amount, parse_inflation, parse_risk_level, parse_years, GoalRequest, InputError,
    LumpsumProjectionRequest, SipProjectionRequest,
};
