//! Engine configuration
//!
//! Extraction bounds, risk thresholds, and market benchmarks are plain data so
//! they can be tuned without touching the rule tables. Every field has a
//! default, so a TOML file only needs to name what it overrides:
//!
//! ```toml
//! [ranges.rent]
//! min = 300
//! max = 25000
//!
//! [market]
//! market_rent = 3100
//! ```

use crate::extractors::MetricKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating an [`EngineConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid range for {metric}: min {min} exceeds max {max}")]
    InvertedRange {
        metric: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid bound for {metric}: {value}")]
    InvalidBound { metric: &'static str, value: f64 },

    #[error("Risk thresholds must increase: low {low}, medium {medium}, high {high}")]
    UnorderedThresholds { low: f64, medium: f64, high: f64 },

    #[error("Market benchmark {name} must be {expected} (found {value})")]
    InvalidBenchmark {
        name: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ranges: ExtractionRanges,
    pub risk: RiskThresholds,
    pub market: MarketBenchmarks,
    pub confidence: DocumentConfidence,
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in MetricKind::ALL {
            self.ranges.for_kind(kind).validate(kind.name())?;
        }
        self.risk.validate()?;
        self.market.validate()?;
        self.confidence.validate()
    }
}

/// Inclusive bounds for an extracted value. A missing `max` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ValueRange {
    pub const fn bounded(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    fn validate(&self, metric: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || self.min < 0.0 {
            return Err(ConfigError::InvalidBound {
                metric,
                value: self.min,
            });
        }
        if let Some(max) = self.max {
            if max.is_nan() {
                return Err(ConfigError::InvalidBound { metric, value: max });
            }
            if self.min > max {
                return Err(ConfigError::InvertedRange {
                    metric,
                    min: self.min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Accepted value ranges per metric kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRanges {
    pub rent: ValueRange,
    pub security_deposit: ValueRange,
    pub pet_fee: ValueRange,
    pub late_fee: ValueRange,
    pub application_fee: ValueRange,
    pub parking_fee: ValueRange,
    /// Days
    pub notice_period: ValueRange,
    /// Months
    pub lease_term: ValueRange,
    pub termination_fee: ValueRange,
}

impl Default for ExtractionRanges {
    fn default() -> Self {
        Self {
            rent: ValueRange::bounded(100.0, 100_000.0),
            security_deposit: ValueRange::bounded(0.0, 100_000.0),
            pet_fee: ValueRange::bounded(0.0, 10_000.0),
            late_fee: ValueRange::bounded(0.0, 500.0),
            application_fee: ValueRange::bounded(0.0, 500.0),
            parking_fee: ValueRange::bounded(0.0, 1_000.0),
            notice_period: ValueRange::bounded(1.0, 365.0),
            lease_term: ValueRange::bounded(1.0, 60.0),
            termination_fee: ValueRange::at_least(0.0),
        }
    }
}

impl ExtractionRanges {
    pub fn for_kind(&self, kind: MetricKind) -> ValueRange {
        match kind {
            MetricKind::Rent => self.rent,
            MetricKind::SecurityDeposit => self.security_deposit,
            MetricKind::PetFee => self.pet_fee,
            MetricKind::LateFee => self.late_fee,
            MetricKind::ApplicationFee => self.application_fee,
            MetricKind::ParkingFee => self.parking_fee,
            MetricKind::NoticePeriod => self.notice_period,
            MetricKind::LeaseTerm => self.lease_term,
            MetricKind::TerminationFee => self.termination_fee,
        }
    }
}

/// Upper bounds (inclusive) of the LOW, MEDIUM and HIGH risk levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 25.0,
            medium: 50.0,
            high: 75.0,
        }
    }
}

impl RiskThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.low.is_finite()
            && self.medium.is_finite()
            && self.high.is_finite()
            && self.low < self.medium
            && self.medium < self.high;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::UnorderedThresholds {
                low: self.low,
                medium: self.medium,
                high: self.high,
            })
        }
    }
}

/// Simulated market data used for benchmarking a single lease
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketBenchmarks {
    pub rent_band_low: f64,
    pub rent_band_high: f64,
    /// Reference rent for revenue-optimization estimates
    pub market_rent: f64,
    pub avg_deposit_ratio: f64,
    pub avg_pet_fee: f64,
    pub avg_notice_period_days: u32,
    /// Monthly pet fee at or below which fees count as reasonable
    pub reasonable_pet_fee: f64,
}

impl Default for MarketBenchmarks {
    fn default() -> Self {
        Self {
            rent_band_low: 2200.0,
            rent_band_high: 2800.0,
            market_rent: 2600.0,
            avg_deposit_ratio: 1.2,
            avg_pet_fee: 25.0,
            avg_notice_period_days: 30,
            reasonable_pet_fee: 50.0,
        }
    }
}

impl MarketBenchmarks {
    fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("rent_band_low", self.rent_band_low),
            ("avg_deposit_ratio", self.avg_deposit_ratio),
            ("avg_pet_fee", self.avg_pet_fee),
            ("reasonable_pet_fee", self.reasonable_pet_fee),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBenchmark {
                    name,
                    expected: "a non-negative number",
                    value,
                });
            }
        }
        if !self.market_rent.is_finite() || self.market_rent <= 0.0 {
            return Err(ConfigError::InvalidBenchmark {
                name: "market_rent",
                expected: "positive",
                value: self.market_rent,
            });
        }
        if !self.rent_band_high.is_finite() || self.rent_band_high < self.rent_band_low {
            return Err(ConfigError::InvalidBenchmark {
                name: "rent_band_high",
                expected: "at least rent_band_low",
                value: self.rent_band_high,
            });
        }
        Ok(())
    }
}

/// Text-length breakpoints for the document confidence heuristic (characters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfidence {
    pub high_text_length: usize,
    pub medium_text_length: usize,
}

impl Default for DocumentConfidence {
    fn default() -> Self {
        Self {
            high_text_length: 10_000,
            medium_text_length: 5_000,
        }
    }
}

impl DocumentConfidence {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.medium_text_length > self.high_text_length {
            return Err(ConfigError::InvalidBenchmark {
                name: "medium_text_length",
                expected: "at most high_text_length",
                value: self.medium_text_length as f64,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [market]
            market_rent = 3100

            [ranges.rent]
            min = 300
            max = 25000
            "#,
        )
        .unwrap();

        assert_eq!(config.market.market_rent, 3100.0);
        assert_eq!(config.market.rent_band_low, 2200.0);
        assert_eq!(config.ranges.rent, ValueRange::bounded(300.0, 25000.0));
        assert_eq!(config.ranges.security_deposit, ValueRange::bounded(0.0, 100_000.0));
        assert_eq!(config.risk, RiskThresholds::default());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = EngineConfig::from_toml_str(
            r#"
            [ranges.notice_period]
            min = 90
            max = 30
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvertedRange {
                metric: "notice_period",
                ..
            }
        ));
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let err = EngineConfig::from_toml_str(
            r#"
            [risk]
            low = 60
            medium = 50
            high = 75
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedThresholds { .. }));
    }

    #[test]
    fn test_zero_market_rent_rejected() {
        let mut config = EngineConfig::default();
        config.market.market_rent = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBenchmark {
                name: "market_rent",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = EngineConfig::from_toml_str("[market\nmarket_rent = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::from_file("/nonexistent/lease-analytics.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unbounded_range_contains_large_values() {
        let range = ValueRange::at_least(0.0);
        assert!(range.contains(1_000_000.0));
        assert!(!range.contains(-1.0));
    }
}
