//! Application state management for the TUI.

use std::sync::Arc;
use std::time::Instant;

use analytics_facade::FilterSpec;
use dataset_facade::{AgeGroup, BirthTable, Month};
use forecast_facade::{
    clamp_sarima_horizon, clamp_trend_horizon, region_series, selection_series,
    AutoSarimaForecaster, ForecastResult, Forecaster, SeasonalTrendForecaster, DEFAULT_HORIZON,
};

use crate::view::ViewModel;
use crate::widgets::ForecastChartData;

/// Main application state.
pub struct App {
    /// The full loaded table; filters select from it on every change
    pub table: Arc<BirthTable>,
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// Filter selections and cursor
    pub filters: FilterState,
    /// Aggregates derived from the current selection
    pub view: ViewModel,
    /// Forecast controls and latest result
    pub forecast: ForecastState,
}

impl App {
    pub fn new(table: Arc<BirthTable>) -> Self {
        let filters = FilterState::from_table(&table);
        let view = ViewModel::compute(&table, filters.to_spec());
        Self {
            table,
            current_tab: Tab::default(),
            should_quit: false,
            status_message: None,
            filters,
            view,
            forecast: ForecastState::default(),
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Move to previous tab.
    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-6).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    /// Recompute the derived view after a filter change.
    ///
    /// A forecast fitted against the previous selection is stale, so it is
    /// dropped rather than shown against the wrong inputs.
    pub fn refresh_view(&mut self) {
        self.view = ViewModel::compute(&self.table, self.filters.to_spec());
        let regions = self.view.regions();
        if self.forecast.region_idx >= regions.len() {
            self.forecast.region_idx = 0;
        }
        self.forecast.clear_result();
    }

    /// Run a fit requested by the key handler.
    ///
    /// Called after the draw so the "fitting" frame is on screen while the
    /// model trains.
    pub fn run_pending_forecast(&mut self) {
        if !self.forecast.pending {
            return;
        }
        self.forecast.pending = false;
        tracing::debug!(
            backend = self.forecast.backend.name(),
            horizon = self.forecast.horizon,
            "running requested forecast fit"
        );

        let series = match self.forecast.backend {
            BackendKind::SeasonalTrend => selection_series(&self.view.filtered),
            BackendKind::AutoSarima => {
                let regions = self.view.regions();
                let Some(region) = regions.get(self.forecast.region_idx) else {
                    self.forecast.error = Some("no region in the current selection".to_string());
                    self.set_status("No region to forecast. Adjust filters first.");
                    return;
                };
                region_series(&self.view.filtered, region)
            }
        };

        let outcome = series.and_then(|series| {
            let result = self.forecast.forecaster().fit(&series, self.forecast.horizon)?;
            Ok((series, result))
        });

        match outcome {
            Ok((series, result)) => {
                self.set_status(format!("Forecast ready ({})", result.model_name));
                self.forecast.chart = Some(ForecastChartData::new(&series.values(), &result));
                self.forecast.result = Some(result);
                self.forecast.error = None;
            }
            Err(err) => {
                self.set_status(format!("Forecast failed: {err}"));
                self.forecast.clear_result();
                self.forecast.error = Some(err.to_string());
            }
        }
    }
}

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Distribution,
    Trends,
    Heatmap,
    Forecast,
    Filters,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Overview => Tab::Distribution,
            Tab::Distribution => Tab::Trends,
            Tab::Trends => Tab::Heatmap,
            Tab::Heatmap => Tab::Forecast,
            Tab::Forecast => Tab::Filters,
            Tab::Filters => Tab::Overview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Overview => Tab::Filters,
            Tab::Distribution => Tab::Overview,
            Tab::Trends => Tab::Distribution,
            Tab::Heatmap => Tab::Trends,
            Tab::Forecast => Tab::Heatmap,
            Tab::Filters => Tab::Forecast,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Overview,
            2 => Tab::Distribution,
            3 => Tab::Trends,
            4 => Tab::Heatmap,
            5 => Tab::Forecast,
            6 => Tab::Filters,
            _ => Tab::Overview,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Distribution => 1,
            Tab::Trends => 2,
            Tab::Heatmap => 3,
            Tab::Forecast => 4,
            Tab::Filters => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Distribution => "Distribution",
            Tab::Trends => "Trends",
            Tab::Heatmap => "Heatmap",
            Tab::Forecast => "Forecast",
            Tab::Filters => "Filters",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::Overview,
            Tab::Distribution,
            Tab::Trends,
            Tab::Heatmap,
            Tab::Forecast,
            Tab::Filters,
        ]
    }
}

/// Which forecasting back-end the Forecast tab drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    SeasonalTrend,
    AutoSarima,
}

impl BackendKind {
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::SeasonalTrend => "Seasonal Trend",
            BackendKind::AutoSarima => "Auto SARIMA",
        }
    }

    pub fn all() -> &'static [BackendKind] {
        &[BackendKind::SeasonalTrend, BackendKind::AutoSarima]
    }

    pub fn next(self) -> Self {
        match self {
            BackendKind::SeasonalTrend => BackendKind::AutoSarima,
            BackendKind::AutoSarima => BackendKind::SeasonalTrend,
        }
    }
}

/// Forecast tab state: controls plus the latest fit.
pub struct ForecastState {
    pub backend: BackendKind,
    pub horizon: usize,
    /// Index into the selection's region list (Auto SARIMA input)
    pub region_idx: usize,
    /// A fit was requested; run it after the next draw
    pub pending: bool,
    pub result: Option<ForecastResult>,
    /// Chart geometry for the latest result, built once per fit
    pub chart: Option<ForecastChartData>,
    pub error: Option<String>,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            horizon: DEFAULT_HORIZON,
            region_idx: 0,
            pending: false,
            result: None,
            chart: None,
            error: None,
        }
    }
}

impl ForecastState {
    pub fn forecaster(&self) -> Box<dyn Forecaster> {
        match self.backend {
            BackendKind::SeasonalTrend => Box::new(SeasonalTrendForecaster::default()),
            BackendKind::AutoSarima => Box::new(AutoSarimaForecaster::default()),
        }
    }

    /// Keep the horizon inside the active back-end's range.
    pub fn clamp_horizon(&mut self) {
        self.horizon = match self.backend {
            BackendKind::SeasonalTrend => clamp_trend_horizon(self.horizon),
            BackendKind::AutoSarima => clamp_sarima_horizon(self.horizon),
        };
    }

    pub fn horizon_up(&mut self) {
        self.horizon += 1;
        self.clamp_horizon();
    }

    pub fn horizon_down(&mut self) {
        self.horizon = self.horizon.saturating_sub(1);
        self.clamp_horizon();
    }

    /// Switch back-end, dropping the result fitted by the other one.
    pub fn toggle_backend(&mut self) {
        self.backend = self.backend.next();
        self.clamp_horizon();
        self.clear_result();
    }

    /// Drop the latest fit along with its chart geometry.
    pub fn clear_result(&mut self) {
        self.result = None;
        self.chart = None;
        self.error = None;
    }
}

/// One row of the Filters tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    YearLo,
    YearHi,
    Month(usize),
    Region(usize),
    Age(usize),
}

/// Filter selections plus the Filters tab cursor.
pub struct FilterState {
    /// Full year span of the loaded table
    pub year_span: (i32, i32),
    pub year_lo: i32,
    pub year_hi: i32,
    /// Month toggles, January first
    pub months: [bool; 12],
    /// (region, selected) in sorted order
    pub regions: Vec<(String, bool)>,
    /// Age group toggles, canonical order
    pub ages: [bool; 4],
    pub cursor: usize,
}

impl FilterState {
    /// Everything-selected state for a loaded table.
    pub fn from_table(table: &BirthTable) -> Self {
        let year_span = table.year_span().unwrap_or((0, 0));
        Self {
            year_span,
            year_lo: year_span.0,
            year_hi: year_span.1,
            months: [true; 12],
            regions: table.regions().into_iter().map(|r| (r, true)).collect(),
            ages: [true; 4],
            cursor: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        2 + 12 + self.regions.len() + 4
    }

    /// What the cursor row controls.
    pub fn row(&self, index: usize) -> FilterRow {
        match index {
            0 => FilterRow::YearLo,
            1 => FilterRow::YearHi,
            i if i < 14 => FilterRow::Month(i - 2),
            i if i < 14 + self.regions.len() => FilterRow::Region(i - 14),
            i => FilterRow::Age((i - 14 - self.regions.len()).min(3)),
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.row_count() - 1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.row_count();
    }

    /// Toggle the value under the cursor. Year rows do not toggle.
    pub fn toggle_current(&mut self) -> bool {
        match self.row(self.cursor) {
            FilterRow::YearLo | FilterRow::YearHi => false,
            FilterRow::Month(i) => {
                self.months[i] = !self.months[i];
                true
            }
            FilterRow::Region(i) => {
                self.regions[i].1 = !self.regions[i].1;
                true
            }
            FilterRow::Age(i) => {
                self.ages[i] = !self.ages[i];
                true
            }
        }
    }

    /// Adjust the year under the cursor; the range cannot invert or leave
    /// the table's span.
    pub fn adjust_current(&mut self, delta: i32) -> bool {
        match self.row(self.cursor) {
            FilterRow::YearLo => {
                let next = (self.year_lo + delta).clamp(self.year_span.0, self.year_hi);
                let changed = next != self.year_lo;
                self.year_lo = next;
                changed
            }
            FilterRow::YearHi => {
                let next = (self.year_hi + delta).clamp(self.year_lo, self.year_span.1);
                let changed = next != self.year_hi;
                self.year_hi = next;
                changed
            }
            _ => false,
        }
    }

    /// Back to the everything-selected state, keeping the cursor.
    pub fn reset(&mut self) {
        self.year_lo = self.year_span.0;
        self.year_hi = self.year_span.1;
        self.months = [true; 12];
        for region in &mut self.regions {
            region.1 = true;
        }
        self.ages = [true; 4];
    }

    /// The specification the current toggles describe.
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            year_range: (self.year_lo, self.year_hi),
            months: Month::all()
                .iter()
                .zip(self.months.iter())
                .filter(|(_, selected)| **selected)
                .map(|(month, _)| month.name().to_string())
                .collect(),
            regions: self
                .regions
                .iter()
                .filter(|(_, selected)| *selected)
                .map(|(region, _)| region.clone())
                .collect(),
            age_groups: AgeGroup::all()
                .iter()
                .zip(self.ages.iter())
                .filter(|(_, selected)| **selected)
                .map(|(group, _)| *group)
                .collect(),
        }
    }
}
