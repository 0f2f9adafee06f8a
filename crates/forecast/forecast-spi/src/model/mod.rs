//! Forecast model types.

mod forecast_result;
mod series;

pub use forecast_result::{ForecastPoint, ForecastResult};
pub use series::{month_index, next_stamp, MonthlyPoint, MonthlySeries};
