//! Tab content renderers.

mod distribution;
mod filters;
mod forecast;
mod heatmap;
mod overview;
mod trends;

pub use distribution::draw_distribution_tab;
pub use filters::draw_filters_tab;
pub use forecast::draw_forecast_tab;
pub use heatmap::draw_heatmap_tab;
pub use overview::draw_overview_tab;
pub use trends::draw_trends_tab;
