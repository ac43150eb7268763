//! Closed-form time-value-of-money formulas
//!
//! All functions are pure and operate on raw `f64` values; rounding for
//! display happens at the response boundary, never here.
//!
//! Compounding conventions differ on purpose: the SIP pair compounds monthly
//! (a SIP is a recurring monthly contribution), the lumpsum pair compounds
//! annually (a single deposit credited once per year).

/// Future value of a goal after inflation
///
/// `present_value * (1 + inflation)^years`
pub fn inflate_goal(present_value: f64, years: u32, inflation: f64) -> f64 {
    present_value * (1.0 + inflation).powi(years as i32)
}

/// Monthly SIP payment required to reach a future-value target
///
/// Solves the ordinary-annuity FV equation for the payment:
/// `PMT = FV * r / ((1+r)^n - 1)` with monthly rate `r` and `n` months.
///
/// Returns `0.0` for zero months or a non-positive monthly rate; the
/// accumulation is undefined there and callers treat it as "no contribution".
pub fn sip_required(goal_fv: f64, annual_return: f64, years: u32) -> f64 {
    let months = years * 12;
    let r = annual_return / 12.0;
    if months == 0 || r <= 0.0 {
        return 0.0;
    }
    let denom = (1.0 + r).powi(months as i32) - 1.0;
    if denom == 0.0 {
        return 0.0;
    }
    goal_fv * r / denom
}

/// Future value of a monthly SIP
///
/// `FV = PMT * ((1+r)^n - 1) / r`, the inverse of [`sip_required`], with the
/// same degenerate-input policy.
pub fn future_value_of_sip(payment: f64, annual_return: f64, years: u32) -> f64 {
    let months = years * 12;
    let r = annual_return / 12.0;
    if months == 0 || r <= 0.0 {
        return 0.0;
    }
    payment * ((1.0 + r).powi(months as i32) - 1.0) / r
}

/// Present value that grows to a future-value target under annual compounding
///
/// `PV = FV / (1 + annual_return)^years`
pub fn lumpsum_required(goal_fv: f64, annual_return: f64, years: u32) -> f64 {
    goal_fv / (1.0 + annual_return).powi(years as i32)
}

/// Future value of a single deposit under annual compounding
///
/// `FV = PV * (1 + annual_return)^years`
pub fn future_value_of_lumpsum(present_value: f64, annual_return: f64, years: u32) -> f64 {
    present_value * (1.0 + annual_return).powi(years as i32)
}
