//! Request value objects and boundary validation
//!
//! Every calculator input is checked here before any formula runs. The HTTP
//! adapter feeds raw query-string values through the `parse_*` helpers; the
//! CLIs feed already-typed values through the `new` constructors. Both paths
//! end in the same validated request objects.

use thiserror::Error;

use crate::assumptions::{RiskTier, DEFAULT_INFLATION, MAX_INFLATION, MAX_YEARS};

/// Invalid input detected at the boundary
///
/// The single error class of the system: the calculators themselves never
/// fail once a request object has been constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("missing required parameter: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: \"{value}\"")]
    NotANumber { name: &'static str, value: String },

    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),

    #[error("years must be between 1 and 100, got {0}")]
    YearsOutOfRange(i64),

    #[error("inflation must be between 0.0 and 0.2, got {0}")]
    InflationOutOfRange(f64),

    #[error("unknown risk level \"{0}\" (expected one of: low, moderate, high)")]
    UnknownRiskLevel(String),
}

/// Parse a required positive monetary amount from a raw query value
pub fn parse_amount(name: &'static str, raw: Option<&str>) -> Result<f64, InputError> {
    let raw = raw.ok_or(InputError::Missing(name))?;
    let value: f64 = raw.parse().map_err(|_| InputError::NotANumber {
        name,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            name,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive(name));
    }
    Ok(value)
}

/// Parse a required positive whole-year horizon from a raw query value
pub fn parse_years(name: &'static str, raw: Option<&str>) -> Result<u32, InputError> {
    let raw = raw.ok_or(InputError::Missing(name))?;
    let value: i64 = raw.parse().map_err(|_| InputError::NotANumber {
        name,
        value: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(InputError::NotPositive(name));
    }
    if value > MAX_YEARS as i64 {
        return Err(InputError::YearsOutOfRange(value));
    }
    Ok(value as u32)
}

/// Parse the optional inflation override, defaulting to 7%
pub fn parse_inflation(raw: Option<&str>) -> Result<f64, InputError> {
    let raw = match raw {
        Some(r) => r,
        None => return Ok(DEFAULT_INFLATION),
    };
    let value: f64 = raw.parse().map_err(|_| InputError::NotANumber {
        name: "inflation",
        value: raw.to_string(),
    })?;
    validate_inflation(value)?;
    Ok(value)
}

/// Parse the required risk tier label
pub fn parse_risk_level(raw: Option<&str>) -> Result<RiskTier, InputError> {
    let raw = raw.ok_or(InputError::Missing("risk_level"))?;
    RiskTier::parse(raw).ok_or_else(|| InputError::UnknownRiskLevel(raw.to_string()))
}

fn validate_inflation(value: f64) -> Result<(), InputError> {
    if !value.is_finite() || !(0.0..=MAX_INFLATION).contains(&value) {
        return Err(InputError::InflationOutOfRange(value));
    }
    Ok(())
}

fn validate_amount(name: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::NotPositive(name));
    }
    Ok(())
}

fn validate_years(years: u32) -> Result<(), InputError> {
    if years == 0 {
        return Err(InputError::NotPositive("years"));
    }
    if years > MAX_YEARS {
        return Err(InputError::YearsOutOfRange(years as i64));
    }
    Ok(())
}

/// Validated inputs for the goal → SIP/lumpsum calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRequest {
    /// Goal amount in today's units
    pub target_corpus: f64,
    pub risk_level: RiskTier,
    /// Horizon in whole years
    pub years: u32,
    /// Assumed annual inflation
    pub inflation: f64,
}

impl GoalRequest {
    /// Build from typed values, applying the default inflation when absent
    pub fn new(
        target_corpus: f64,
        risk_level: RiskTier,
        years: u32,
        inflation: Option<f64>,
    ) -> Result<Self, InputError> {
        validate_amount("target_corpus", target_corpus)?;
        validate_years(years)?;
        let inflation = inflation.unwrap_or(DEFAULT_INFLATION);
        validate_inflation(inflation)?;
        Ok(Self {
            target_corpus,
            risk_level,
            years,
            inflation,
        })
    }

    /// Build from raw query-string values
    pub fn from_raw(
        target_corpus: Option<&str>,
        risk_level: Option<&str>,
        years: Option<&str>,
        inflation: Option<&str>,
    ) -> Result<Self, InputError> {
        Ok(Self {
            target_corpus: parse_amount("target_corpus", target_corpus)?,
            risk_level: parse_risk_level(risk_level)?,
            years: parse_years("years", years)?,
            inflation: parse_inflation(inflation)?,
        })
    }
}

/// Validated inputs for the SIP → corpus projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SipProjectionRequest {
    /// Recurring monthly contribution
    pub monthly_sip: f64,
    pub risk_level: RiskTier,
    pub years: u32,
}

impl SipProjectionRequest {
    pub fn new(monthly_sip: f64, risk_level: RiskTier, years: u32) -> Result<Self, InputError> {
        validate_amount("monthly_sip", monthly_sip)?;
        validate_years(years)?;
        Ok(Self {
            monthly_sip,
            risk_level,
            years,
        })
    }

    /// Build from raw query-string values
    pub fn from_raw(
        monthly_sip: Option<&str>,
        risk_level: Option<&str>,
        years: Option<&str>,
    ) -> Result<Self, InputError> {
        Ok(Self {
            monthly_sip: parse_amount("monthly_sip", monthly_sip)?,
            risk_level: parse_risk_level(risk_level)?,
            years: parse_years("years", years)?,
        })
    }
}

/// Validated inputs for the lumpsum → corpus projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumpsumProjectionRequest {
    /// One-time deposit
    pub lumpsum: f64,
    pub risk_level: RiskTier,
    pub years: u32,
}

impl LumpsumProjectionRequest {
    pub fn new(lumpsum: f64, risk_level: RiskTier, years: u32) -> Result<Self, InputError> {
        validate_amount("lumpsum", lumpsum)?;
        validate_years(years)?;
        Ok(Self {
            lumpsum,
            risk_level,
            years,
        })
    }

    /// Build from raw query-string values
    pub fn from_raw(
        lumpsum: Option<&str>,
        risk_level: Option<&str>,
        years: Option<&str>,
    ) -> Result<Self, InputError> {
        Ok(Self {
            lumpsum: parse_amount("lumpsum", lumpsum)?,
            risk_level: parse_risk_level(risk_level)?,
            years: parse_years("years", years)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_request_from_raw() {
        let req = GoalRequest::from_raw(
            Some("1000000"),
            Some("moderate"),
            Some("10"),
            None,
        )
        .unwrap();

        assert_eq!(req.target_corpus, 1_000_000.0);
        assert_eq!(req.risk_level, RiskTier::Moderate);
        assert_eq!(req.years, 10);
        assert_eq!(req.inflation, DEFAULT_INFLATION);
    }

    #[test]
    fn test_missing_parameters() {
        let err = GoalRequest::from_raw(None, Some("low"), Some("5"), None).unwrap_err();
        assert_eq!(err, InputError::Missing("target_corpus"));

        let err = GoalRequest::from_raw(Some("100"), None, Some("5"), None).unwrap_err();
        assert_eq!(err, InputError::Missing("risk_level"));

        let err = GoalRequest::from_raw(Some("100"), Some("low"), None, None).unwrap_err();
        assert_eq!(err, InputError::Missing("years"));
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let err =
            GoalRequest::from_raw(Some("a lot"), Some("low"), Some("5"), None).unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                name: "target_corpus",
                value: "a lot".to_string()
            }
        );

        let err = GoalRequest::from_raw(Some("100"), Some("low"), Some("ten"), None).unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                name: "years",
                value: "ten".to_string()
            }
        );

        // Rust parses "inf"/"nan" as floats; they are not valid amounts
        let err = GoalRequest::from_raw(Some("inf"), Some("low"), Some("5"), None).unwrap_err();
        assert!(matches!(err, InputError::NotANumber { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = GoalRequest::from_raw(Some("-5"), Some("low"), Some("5"), None).unwrap_err();
        assert_eq!(err, InputError::NotPositive("target_corpus"));

        let err = GoalRequest::from_raw(Some("100"), Some("low"), Some("0"), None).unwrap_err();
        assert_eq!(err, InputError::NotPositive("years"));

        let err = GoalRequest::from_raw(Some("100"), Some("low"), Some("-3"), None).unwrap_err();
        assert_eq!(err, InputError::NotPositive("years"));

        // Horizons past the supported range would overflow the month count
        let err =
            GoalRequest::from_raw(Some("100"), Some("low"), Some("500000000"), None).unwrap_err();
        assert_eq!(err, InputError::YearsOutOfRange(500_000_000));

        let err = GoalRequest::new(100.0, RiskTier::Low, 101, None).unwrap_err();
        assert_eq!(err, InputError::YearsOutOfRange(101));

        let err =
            GoalRequest::from_raw(Some("100"), Some("low"), Some("5"), Some("0.25")).unwrap_err();
        assert_eq!(err, InputError::InflationOutOfRange(0.25));

        let err =
            GoalRequest::from_raw(Some("100"), Some("low"), Some("5"), Some("-0.01")).unwrap_err();
        assert_eq!(err, InputError::InflationOutOfRange(-0.01));
    }

    #[test]
    fn test_inflation_bounds_inclusive() {
        let zero = GoalRequest::from_raw(Some("100"), Some("low"), Some("5"), Some("0.0")).unwrap();
        assert_eq!(zero.inflation, 0.0);

        let max = GoalRequest::from_raw(Some("100"), Some("low"), Some("5"), Some("0.2")).unwrap();
        assert_eq!(max.inflation, 0.2);
    }

    #[test]
    fn test_unknown_risk_level() {
        let err =
            GoalRequest::from_raw(Some("100"), Some("medium"), Some("5"), None).unwrap_err();
        assert_eq!(err, InputError::UnknownRiskLevel("medium".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown risk level \"medium\" (expected one of: low, moderate, high)"
        );
    }

    #[test]
    fn test_projection_requests_from_raw() {
        let sip = SipProjectionRequest::from_raw(Some("10000"), Some("high"), Some("15")).unwrap();
        assert_eq!(sip.monthly_sip, 10_000.0);
        assert_eq!(sip.risk_level, RiskTier::High);
        assert_eq!(sip.years, 15);

        let err = SipProjectionRequest::from_raw(None, Some("high"), Some("15")).unwrap_err();
        assert_eq!(err, InputError::Missing("monthly_sip"));

        let lump = LumpsumProjectionRequest::from_raw(Some("500000"), Some("low"), Some("8"))
            .unwrap();
        assert_eq!(lump.lumpsum, 500_000.0);

        let err =
            LumpsumProjectionRequest::from_raw(Some("0"), Some("low"), Some("8")).unwrap_err();
        assert_eq!(err, InputError::NotPositive("lumpsum"));
    }

    #[test]
    fn test_typed_constructors_validate() {
        let err = GoalRequest::new(1_000.0, RiskTier::Low, 5, Some(0.5)).unwrap_err();
        assert_eq!(err, InputError::InflationOutOfRange(0.5));

        let err = SipProjectionRequest::new(-10.0, RiskTier::Low, 5).unwrap_err();
        assert_eq!(err, InputError::NotPositive("monthly_sip"));

        let err = LumpsumProjectionRequest::new(10.0, RiskTier::Low, 0).unwrap_err();
        assert_eq!(err, InputError::NotPositive("years"));
    }
}
