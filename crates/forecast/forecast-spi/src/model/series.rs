//! Univariate monthly series types.

use serde::{Deserialize, Serialize};

use dataset_spi::Month;

/// One observation: total births for a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month: Month,
    pub value: f64,
}

impl MonthlyPoint {
    /// Create a new point.
    pub fn new(year: i32, month: Month, value: f64) -> Self {
        Self { year, month, value }
    }

    /// Absolute month index (year * 12 + month offset), for gap arithmetic.
    pub fn month_index(&self) -> i64 {
        month_index(self.year, self.month)
    }

    /// Display label, e.g. "Jan 2026".
    pub fn label(&self) -> String {
        format!("{} {}", self.month.short_name(), self.year)
    }
}

/// Absolute month index of a (year, month) stamp.
pub fn month_index(year: i32, month: Month) -> i64 {
    year as i64 * 12 + (month.number() as i64 - 1)
}

/// The calendar month following a (year, month) stamp.
pub fn next_stamp(year: i32, month: Month) -> (i32, Month) {
    let next = month.next();
    if next == Month::January {
        (year + 1, next)
    } else {
        (year, next)
    }
}

/// A univariate monthly time series, strictly ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    /// Create a series from points, sorting them chronologically.
    pub fn new(mut points: Vec<MonthlyPoint>) -> Self {
        points.sort_by_key(|p| p.month_index());
        Self { points }
    }

    /// Observations in chronological order.
    pub fn points(&self) -> &[MonthlyPoint] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The values only, chronological.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// The last observed (year, month) stamp.
    pub fn last_stamp(&self) -> Option<(i32, Month)> {
        self.points.last().map(|p| (p.year, p.month))
    }

    /// Resample to a strict monthly grid from the first to the last observed
    /// month, filling missing months with zero.
    pub fn resample_monthly(&self) -> MonthlySeries {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return MonthlySeries::default();
        };

        let mut grid = Vec::with_capacity((last.month_index() - first.month_index() + 1) as usize);
        let mut cursor = (first.year, first.month);
        let mut observed = self.points.iter().peekable();

        while month_index(cursor.0, cursor.1) <= last.month_index() {
            let value = match observed.peek() {
                Some(p) if (p.year, p.month) == cursor => observed.next().map(|p| p.value).unwrap_or(0.0),
                _ => 0.0,
            };
            grid.push(MonthlyPoint::new(cursor.0, cursor.1, value));
            cursor = next_stamp(cursor.0, cursor.1);
        }

        MonthlySeries { points: grid }
    }
}
