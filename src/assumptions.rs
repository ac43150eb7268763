//! Planning assumptions: risk-tiered expected returns and inflation defaults

use serde::{Deserialize, Serialize};

/// Default assumed annual inflation (7% p.a.)
pub const DEFAULT_INFLATION: f64 = 0.07;

/// Highest inflation override accepted at the boundary
pub const MAX_INFLATION: f64 = 0.20;

/// Longest horizon accepted at the boundary, in whole years
pub const MAX_YEARS: u32 = 100;

/// Risk tier of the investor, mapped to an assumed nominal annual return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// All tiers, ordered from lowest to highest assumed return
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    /// Parse the wire label (`low`/`moderate`/`high`, case-sensitive)
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "low" => Some(RiskTier::Low),
            "moderate" => Some(RiskTier::Moderate),
            "high" => Some(RiskTier::High),
            _ => None,
        }
    }

    /// Get the string representation matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// Expected nominal annual return by risk tier
#[derive(Debug, Clone, Copy)]
pub struct ReturnAssumptions {
    /// Annual return assumed for the low tier
    pub low: f64,
    /// Annual return assumed for the moderate tier
    pub moderate: f64,
    /// Annual return assumed for the high tier
    pub high: f64,
}

impl ReturnAssumptions {
    /// Default return assumptions: low 10.5%, moderate 13%, high 15.5%
    pub fn default_pricing() -> Self {
        Self {
            low: 0.105,
            moderate: 0.13,
            high: 0.155,
        }
    }

    /// Get the assumed annual return for a risk tier
    pub fn annual_return(&self, tier: RiskTier) -> f64 {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Moderate => self.moderate,
            RiskTier::High => self.high,
        }
    }
}

impl Default for ReturnAssumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

/// Container for all planning assumptions
///
/// Built once at process start and read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Assumptions {
    pub returns: ReturnAssumptions,
    /// Inflation applied when the request does not override it
    pub default_inflation: f64,
}

impl Assumptions {
    /// Create assumptions with the standard return table and 7% inflation
    pub fn default_pricing() -> Self {
        Self {
            returns: ReturnAssumptions::default_pricing(),
            default_inflation: DEFAULT_INFLATION,
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_return_table() {
        let returns = ReturnAssumptions::default_pricing();

        assert!((returns.annual_return(RiskTier::Low) - 0.105).abs() < 1e-12);
        assert!((returns.annual_return(RiskTier::Moderate) - 0.13).abs() < 1e-12);
        assert!((returns.annual_return(RiskTier::High) - 0.155).abs() < 1e-12);
    }

    #[test]
    fn test_returns_increase_with_risk() {
        let returns = ReturnAssumptions::default_pricing();

        let mut last = 0.0;
        for tier in RiskTier::ALL {
            let r = returns.annual_return(tier);
            assert!(r > last, "return for {:?} should exceed {}", tier, last);
            last = r;
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(RiskTier::parse("low"), Some(RiskTier::Low));
        assert_eq!(RiskTier::parse("moderate"), Some(RiskTier::Moderate));
        assert_eq!(RiskTier::parse("high"), Some(RiskTier::High));

        // Labels are case-sensitive wire values
        assert_eq!(RiskTier::parse("High"), None);
        assert_eq!(RiskTier::parse("medium"), None);
        assert_eq!(RiskTier::parse(""), None);
    }

    #[test]
    fn test_label_round_trip() {
        for tier in RiskTier::ALL {
            assert_eq!(RiskTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&RiskTier::Moderate).unwrap(),
            "\"moderate\""
        );
        let tier: RiskTier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, RiskTier::High);
    }
}
