//! Pure row filtering.

use analytics_spi::FilterSpec;
use dataset_spi::BirthTable;

/// Return the subset of rows matching the spec's year, month, and region
/// predicates. Never mutates the input; recomputed on every render.
pub fn filter_table(table: &BirthTable, spec: &FilterSpec) -> BirthTable {
    let rows = table
        .records()
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect();
    BirthTable::new(rows)
}
