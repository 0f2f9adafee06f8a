//! Dataset Service Provider Interface
//!
//! Defines traits and types for loading regional monthly birth statistics.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TableSource;
pub use error::{DatasetError, Result};
pub use model::{AgeGroup, BirthRecord, BirthTable, Month};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_calendar_order() {
        let months = Month::all();
        assert_eq!(months[0], Month::January);
        assert_eq!(months[11], Month::December);
    }

    #[test]
    fn test_age_group_labels() {
        let labels: Vec<&str> = AgeGroup::all().iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["<20", "20-29", "30-39", "40+"]);
    }

    #[test]
    fn test_table_roundtrip() {
        let table = BirthTable::new(vec![
            BirthRecord::new(2020, "January", "East", 100, 10, 40, 30, 20),
            BirthRecord::new(2020, "February", "West", 80, 5, 35, 30, 10),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_births(), 180);
        assert_eq!(table.year_span(), Some((2020, 2020)));
        assert_eq!(table.regions(), vec!["East".to_string(), "West".to_string()]);
    }

    #[test]
    fn test_malformed_month_is_preserved() {
        // Month labels are not validated; a bad label is a distinct category.
        let record = BirthRecord::new(2020, "Janury", "East", 100, 10, 40, 30, 20);
        assert_eq!(record.month, "Janury");
        assert_eq!(Month::from_name(&record.month), None);
    }
}
