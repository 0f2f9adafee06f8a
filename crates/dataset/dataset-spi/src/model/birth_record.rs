//! Birth record and table types.

use serde::{Deserialize, Serialize};

use super::AgeGroup;

/// One row of the source table: births in a region for one month of one year.
///
/// `month` is kept as the raw string from the source file. Malformed month
/// labels load without error; they simply drop out of calendar-keyed
/// aggregates downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Calendar year
    pub year: i32,
    /// Full English month name, as loaded
    pub month: String,
    /// Region name
    pub region: String,
    /// Total births for this (region, year, month)
    pub birth_count: u64,
    /// Births to mothers under 20
    pub under_20: u64,
    /// Births to mothers aged 20-29
    pub age_20_29: u64,
    /// Births to mothers aged 30-39
    pub age_30_39: u64,
    /// Births to mothers aged 40 and over
    pub age_40_plus: u64,
}

impl BirthRecord {
    /// Create a new record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: &str,
        region: &str,
        birth_count: u64,
        under_20: u64,
        age_20_29: u64,
        age_30_39: u64,
        age_40_plus: u64,
    ) -> Self {
        Self {
            year,
            month: month.to_string(),
            region: region.to_string(),
            birth_count,
            under_20,
            age_20_29,
            age_30_39,
            age_40_plus,
        }
    }

    /// The count for one age group column.
    pub fn age_count(&self, group: AgeGroup) -> u64 {
        match group {
            AgeGroup::Under20 => self.under_20,
            AgeGroup::From20To29 => self.age_20_29,
            AgeGroup::From30To39 => self.age_30_39,
            AgeGroup::Over40 => self.age_40_plus,
        }
    }
}

/// The in-memory source table. Immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BirthTable {
    records: Vec<BirthRecord>,
}

impl BirthTable {
    /// Create a table from rows.
    pub fn new(records: Vec<BirthRecord>) -> Self {
        Self { records }
    }

    /// All rows in load order.
    pub fn records(&self) -> &[BirthRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum year present, or None for an empty table.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.records.iter().map(|r| r.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Sum of `birth_count` over all rows.
    pub fn total_births(&self) -> u64 {
        self.records.iter().map(|r| r.birth_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: &str, region: &str, count: u64) -> BirthRecord {
        BirthRecord::new(year, month, region, count, 10, 40, 30, 5)
    }

    #[test]
    fn test_record_new() {
        let r = BirthRecord::new(2020, "January", "East", 85, 10, 40, 30, 5);
        assert_eq!(r.year, 2020);
        assert_eq!(r.month, "January");
        assert_eq!(r.region, "East");
        assert_eq!(r.birth_count, 85);
    }

    #[test]
    fn test_age_count() {
        let r = record(2020, "January", "East", 85);
        assert_eq!(r.age_count(AgeGroup::Under20), 10);
        assert_eq!(r.age_count(AgeGroup::From20To29), 40);
        assert_eq!(r.age_count(AgeGroup::From30To39), 30);
        assert_eq!(r.age_count(AgeGroup::Over40), 5);
    }

    #[test]
    fn test_year_span() {
        let table = BirthTable::new(vec![
            record(2021, "January", "East", 100),
            record(2019, "March", "West", 90),
            record(2020, "July", "East", 95),
        ]);
        assert_eq!(table.year_span(), Some((2019, 2021)));
    }

    #[test]
    fn test_year_span_empty() {
        assert_eq!(BirthTable::default().year_span(), None);
    }

    #[test]
    fn test_regions_sorted_unique() {
        let table = BirthTable::new(vec![
            record(2020, "January", "West", 100),
            record(2020, "February", "East", 90),
            record(2020, "March", "West", 95),
        ]);
        assert_eq!(table.regions(), vec!["East".to_string(), "West".to_string()]);
    }

    #[test]
    fn test_total_births() {
        let table = BirthTable::new(vec![
            record(2020, "January", "East", 100),
            record(2020, "February", "East", 150),
        ]);
        assert_eq!(table.total_births(), 250);
    }
}
