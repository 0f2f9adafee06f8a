//! Analytics Core
//!
//! Pure filtering and aggregation functions over the birth table.

mod aggregate;
mod filter;
mod heatmap;

pub use aggregate::{
    age_share, age_trend_by_year, aggregate, kpis, monthly_averages, region_share,
    region_trend_by_year, yearly_totals,
};
pub use filter::filter_table;
pub use heatmap::heatmap_matrix;
