//! Configuration for the two forecasting back-ends.

use serde::{Deserialize, Serialize};

/// Default forecast horizon shared by both back-ends, in months.
pub const DEFAULT_HORIZON: usize = 12;

/// Horizon range for the seasonal-trend back-end.
pub const TREND_HORIZON_MIN: usize = 3;
pub const TREND_HORIZON_MAX: usize = 36;

/// Horizon range for the auto-tuned SARIMA back-end.
pub const SARIMA_HORIZON_MIN: usize = 6;
pub const SARIMA_HORIZON_MAX: usize = 36;

/// Scoring metric used when ranking SARIMA candidates on the holdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreMetric {
    Mae,
    Rmse,
    Mape,
}

impl Default for ScoreMetric {
    fn default() -> Self {
        ScoreMetric::Mae
    }
}

/// Configuration for the seasonal-trend regression back-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalTrendConfig {
    /// Confidence level for the interval band, in (0, 1)
    pub confidence_level: f64,
}

impl Default for SeasonalTrendConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Builder for SeasonalTrendConfig
pub struct SeasonalTrendConfigBuilder {
    confidence_level: f64,
}

impl SeasonalTrendConfigBuilder {
    pub fn new() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }

    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    pub fn build(self) -> Result<SeasonalTrendConfig, &'static str> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err("confidence_level must be in (0, 1)");
        }
        Ok(SeasonalTrendConfig {
            confidence_level: self.confidence_level,
        })
    }
}

impl Default for SeasonalTrendConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the auto-tuned seasonal ARIMA back-end.
///
/// The grid bounds are inclusive. Candidates with `p == 0 && q == 0` are
/// skipped: a pure differencing model has nothing to tune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSarimaConfig {
    /// Seasonal period in months
    pub period: usize,
    /// Maximum AR order
    pub max_p: usize,
    /// Maximum regular differencing order
    pub max_d: usize,
    /// Maximum MA order
    pub max_q: usize,
    /// Maximum seasonal differencing order
    pub max_seasonal_d: usize,
    /// Fraction of the series held out for candidate scoring
    pub test_ratio: f64,
    /// Metric used to rank candidates
    pub metric: ScoreMetric,
}

impl Default for AutoSarimaConfig {
    fn default() -> Self {
        Self {
            period: 12,
            max_p: 3,
            max_d: 2,
            max_q: 3,
            max_seasonal_d: 1,
            test_ratio: 0.2,
            metric: ScoreMetric::Mae,
        }
    }
}

/// Builder for AutoSarimaConfig
pub struct AutoSarimaConfigBuilder {
    config: AutoSarimaConfig,
}

impl AutoSarimaConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AutoSarimaConfig::default(),
        }
    }

    pub fn period(mut self, period: usize) -> Self {
        self.config.period = period;
        self
    }

    pub fn max_p(mut self, p: usize) -> Self {
        self.config.max_p = p;
        self
    }

    pub fn max_d(mut self, d: usize) -> Self {
        self.config.max_d = d;
        self
    }

    pub fn max_q(mut self, q: usize) -> Self {
        self.config.max_q = q;
        self
    }

    pub fn max_seasonal_d(mut self, d: usize) -> Self {
        self.config.max_seasonal_d = d;
        self
    }

    pub fn test_ratio(mut self, ratio: f64) -> Self {
        self.config.test_ratio = ratio;
        self
    }

    pub fn metric(mut self, metric: ScoreMetric) -> Self {
        self.config.metric = metric;
        self
    }

    pub fn build(self) -> Result<AutoSarimaConfig, &'static str> {
        if self.config.period < 2 {
            return Err("period must be at least 2");
        }
        if self.config.test_ratio <= 0.0 || self.config.test_ratio >= 1.0 {
            return Err("test_ratio must be in (0, 1)");
        }
        Ok(self.config)
    }
}

impl Default for AutoSarimaConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a requested horizon into the seasonal-trend range.
pub fn clamp_trend_horizon(horizon: usize) -> usize {
    horizon.clamp(TREND_HORIZON_MIN, TREND_HORIZON_MAX)
}

/// Clamp a requested horizon into the SARIMA range.
pub fn clamp_sarima_horizon(horizon: usize) -> usize {
    horizon.clamp(SARIMA_HORIZON_MIN, SARIMA_HORIZON_MAX)
}
