//! Builder for filter specifications.

use std::collections::BTreeSet;

use analytics_spi::{AnalyticsError, FilterSpec};
use dataset_spi::{AgeGroup, Month};

/// Builder for FilterSpec.
///
/// Months and age groups default to everything; the year range is required
/// because it cannot be guessed without a table (use
/// [`FilterSpec::select_all`] for table-derived defaults).
#[derive(Debug, Default)]
pub struct FilterSpecBuilder {
    year_range: Option<(i32, i32)>,
    months: Option<BTreeSet<String>>,
    regions: Option<BTreeSet<String>>,
    age_groups: Option<BTreeSet<AgeGroup>>,
}

impl FilterSpecBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive year range.
    pub fn year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = Some((min, max));
        self
    }

    /// Set the selected months.
    pub fn months<I: IntoIterator<Item = Month>>(mut self, months: I) -> Self {
        self.months = Some(months.into_iter().map(|m| m.name().to_string()).collect());
        self
    }

    /// Set the selected regions.
    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Set the selected age groups.
    pub fn age_groups<I: IntoIterator<Item = AgeGroup>>(mut self, groups: I) -> Self {
        self.age_groups = Some(groups.into_iter().collect());
        self
    }

    /// Build the specification, rejecting an inverted year range.
    pub fn build(self) -> Result<FilterSpec, AnalyticsError> {
        let year_range = self
            .year_range
            .ok_or(AnalyticsError::MissingField("year_range"))?;
        if year_range.0 > year_range.1 {
            return Err(AnalyticsError::InvalidYearRange {
                min: year_range.0,
                max: year_range.1,
            });
        }

        Ok(FilterSpec {
            year_range,
            months: self.months.unwrap_or_else(|| {
                Month::all().iter().map(|m| m.name().to_string()).collect()
            }),
            regions: self.regions.ok_or(AnalyticsError::MissingField("regions"))?,
            age_groups: self
                .age_groups
                .unwrap_or_else(|| AgeGroup::all().iter().copied().collect()),
        })
    }
}
