//! Forecaster trait definition.

use crate::error::Result;
use crate::model::{ForecastResult, MonthlySeries};

/// The forecasting capability shared by both back-ends.
///
/// One fit per interaction: given a monthly series and a horizon, return
/// point forecasts (plus bounds where the back-end provides them). The two
/// implementations deliberately differ in input scope and uncertainty
/// contract; callers select one, never merge them.
pub trait Forecaster: Send + Sync {
    /// Back-end name for display and diagnostics.
    fn name(&self) -> &str;

    /// Fit the series and forecast `horizon` future months.
    fn fit(&self, series: &MonthlySeries, horizon: usize) -> Result<ForecastResult>;
}
