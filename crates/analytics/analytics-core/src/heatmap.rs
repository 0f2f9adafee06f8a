//! Region × month heatmap computation.

use std::collections::BTreeMap;

use analytics_spi::HeatmapMatrix;
use dataset_spi::{BirthTable, Month};

/// Mean birth_count per (region, calendar month) cell.
///
/// Regions are row-sorted; columns follow calendar order. Cells with no
/// matching rows stay `None` so the renderer can distinguish "no data" from
/// a genuine zero mean.
pub fn heatmap_matrix(filtered: &BirthTable) -> HeatmapMatrix {
    let mut sums: BTreeMap<(String, Month), (u64, u64)> = BTreeMap::new();
    for record in filtered.records() {
        let Some(month) = Month::from_name(&record.month) else {
            continue;
        };
        let entry = sums.entry((record.region.clone(), month)).or_insert((0, 0));
        entry.0 += record.birth_count;
        entry.1 += 1;
    }

    let regions = filtered.regions();
    let cells = regions
        .iter()
        .map(|region| {
            Month::all()
                .iter()
                .map(|month| {
                    sums.get(&(region.clone(), *month))
                        .map(|(total, rows)| *total as f64 / *rows as f64)
                })
                .collect()
        })
        .collect();

    HeatmapMatrix { regions, cells }
}
