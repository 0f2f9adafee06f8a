//! Filter specification produced from UI state on every render.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dataset_spi::{AgeGroup, BirthRecord, BirthTable, Month};

/// Row filter plus the age-column selection.
///
/// The year range is inclusive; months and regions filter rows. Age groups do
/// not filter rows, they select which age columns participate in age-based
/// aggregates. An empty set in any dimension yields an empty result, which
/// all consumers tolerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Inclusive (min, max) year range
    pub year_range: (i32, i32),
    /// Selected month names (full English names)
    pub months: BTreeSet<String>,
    /// Selected regions
    pub regions: BTreeSet<String>,
    /// Selected age group columns
    pub age_groups: BTreeSet<AgeGroup>,
}

impl FilterSpec {
    /// A spec selecting everything present in the table: its full year span,
    /// all twelve months, every region, and all four age groups.
    pub fn select_all(table: &BirthTable) -> Self {
        let year_range = table.year_span().unwrap_or((0, 0));
        Self {
            year_range,
            months: Month::all().iter().map(|m| m.name().to_string()).collect(),
            regions: table.regions().into_iter().collect(),
            age_groups: AgeGroup::all().iter().copied().collect(),
        }
    }

    /// Whether a row passes the year, month, and region predicates.
    pub fn matches(&self, record: &BirthRecord) -> bool {
        record.year >= self.year_range.0
            && record.year <= self.year_range.1
            && self.months.contains(&record.month)
            && self.regions.contains(&record.region)
    }

    /// Selected age groups in canonical order.
    pub fn selected_ages(&self) -> Vec<AgeGroup> {
        AgeGroup::all()
            .iter()
            .filter(|g| self.age_groups.contains(g))
            .copied()
            .collect()
    }
}
