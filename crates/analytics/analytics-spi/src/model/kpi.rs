//! Scalar key indicators.

use serde::{Deserialize, Serialize};

use dataset_spi::AgeGroup;

/// The four KPI tiles.
///
/// Arg-max style indicators are `None` over an empty selection; consumers
/// render a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Sum of birth_count over the filtered rows
    pub total_births: u64,
    /// Mean over regions of each region's per-row mean birth_count
    pub avg_per_region: Option<f64>,
    /// Region with the maximum summed birth_count
    pub top_region: Option<String>,
    /// Selected age column with the maximum filtered total
    pub dominant_age_group: Option<AgeGroup>,
}

impl KpiSummary {
    /// The all-placeholder summary for an empty selection.
    pub fn empty() -> Self {
        Self {
            total_births: 0,
            avg_per_region: None,
            top_region: None,
            dominant_age_group: None,
        }
    }
}
