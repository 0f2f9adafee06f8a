//! Contracts (traits) for forecasting back-ends.

mod forecaster;

pub use forecaster::Forecaster;
