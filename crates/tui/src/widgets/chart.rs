//! Chart widgets for series visualization.
//!
//! Point geometry is owned by [`ChartSeries`] / [`ForecastChartData`],
//! rebuilt only when the underlying report or fit changes; the chart
//! constructors borrow it, so redrawing on every tick allocates nothing
//! for the datasets.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use analytics_facade::TrendSeries;
use forecast_facade::ForecastResult;

const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// One named line with its point geometry.
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Chart geometry for per-year trend series.
    pub fn from_trends(series: &[TrendSeries]) -> Vec<ChartSeries> {
        series
            .iter()
            .map(|entry| ChartSeries {
                label: entry.label.clone(),
                points: entry
                    .points
                    .iter()
                    .map(|(year, births)| (*year as f64, *births as f64))
                    .collect(),
            })
            .collect()
    }
}

/// Chart geometry for the latest fit.
///
/// Future-side segments are offset on the x axis so they start where the
/// history ends.
pub struct ForecastChartData {
    pub history: Vec<(f64, f64)>,
    pub fitted: Option<Vec<(f64, f64)>>,
    pub forecast: Vec<(f64, f64)>,
    pub lower: Option<Vec<(f64, f64)>>,
    pub upper: Option<Vec<(f64, f64)>>,
}

impl ForecastChartData {
    pub fn new(history: &[f64], result: &ForecastResult) -> Self {
        let n = history.len();

        let history_points = history
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        let fitted = result.fitted.as_ref().map(|fitted| {
            fitted
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect()
        });

        let forecast = result
            .future
            .iter()
            .enumerate()
            .map(|(i, row)| ((n + i) as f64, row.point))
            .collect();

        let band = |side: fn(&forecast_facade::ForecastPoint) -> Option<f64>| {
            result
                .future
                .iter()
                .map(side)
                .collect::<Option<Vec<f64>>>()
                .map(|values| {
                    values
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| ((n + i) as f64, v))
                        .collect()
                })
        };

        Self {
            history: history_points,
            fitted,
            forecast,
            lower: band(|row| row.lower),
            upper: band(|row| row.upper),
        }
    }
}

/// Create a multi-series chart of per-year sums.
pub fn create_trend_chart<'a>(title: &'a str, series: &'a [ChartSeries]) -> Chart<'a> {
    let mut datasets = Vec::new();
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (i, entry) in series.iter().enumerate() {
        for &(x, y) in &entry.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }

        datasets.push(
            Dataset::default()
                .name(entry.label.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(&entry.points),
        );
    }

    if !x_min.is_finite() {
        x_min = 0.0;
        x_max = 1.0;
        y_max = 1.0;
    }
    if x_max - x_min < 1.0 {
        // A single year still needs a non-degenerate axis
        x_max = x_min + 1.0;
    }
    let y_max = y_max.max(1.0) * 1.05;
    let x_mid = (x_min + x_max) / 2.0;

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(format!("{}", x_min as i32)),
                    Span::raw(format!("{}", x_mid as i32)),
                    Span::raw(format!("{}", x_max as i32)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Births")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        )
}

/// Create a forecast chart with history, optional back-fit, and predictions.
pub fn create_forecast_chart<'a>(data: &'a ForecastChartData, model_name: &'a str) -> Chart<'a> {
    let mut datasets = vec![
        Dataset::default()
            .name("Observed")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data.history),
        Dataset::default()
            .name("Forecast")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&data.forecast),
    ];

    // In-sample back-fit, when the back-end provides one
    if let Some(fitted) = &data.fitted {
        datasets.push(
            Dataset::default()
                .name("Fitted")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(fitted),
        );
    }

    // Interval band, when the back-end provides one
    if let (Some(lower), Some(upper)) = (&data.lower, &data.upper) {
        datasets.push(
            Dataset::default()
                .name("Lower")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(lower),
        );
        datasets.push(
            Dataset::default()
                .name("Upper")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(upper),
        );
    }

    // Calculate bounds
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let all_points = data
        .history
        .iter()
        .chain(&data.forecast)
        .chain(data.lower.iter().flatten())
        .chain(data.upper.iter().flatten());
    for &(_, y) in all_points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let y_min = y_min * 0.95;
    let y_max = y_max * 1.05;
    let x_max = (data.history.len() + data.forecast.len()) as f64;

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Forecast ({}) ", model_name)),
        )
        .x_axis(
            Axis::default()
                .title("Month")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw("History"),
                    Span::styled("Now", Style::default().fg(Color::Yellow)),
                    Span::raw("Forecast"),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Births")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_facade::Month;
    use forecast_facade::ForecastPoint;

    #[test]
    fn test_trend_geometry_maps_years() {
        let series = vec![TrendSeries {
            label: "East".to_string(),
            points: vec![(2020, 100), (2021, 120)],
        }];
        let charts = ChartSeries::from_trends(&series);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].label, "East");
        assert_eq!(charts[0].points, vec![(2020.0, 100.0), (2021.0, 120.0)]);
    }

    #[test]
    fn test_forecast_geometry_offsets_future_points() {
        let result = ForecastResult {
            model_name: "seasonal-trend".to_string(),
            fitted: Some(vec![99.0, 101.0]),
            future: vec![ForecastPoint {
                year: 2021,
                month: Month::January,
                point: 102.0,
                lower: Some(95.0),
                upper: Some(109.0),
            }],
        };
        let data = ForecastChartData::new(&[100.0, 100.0], &result);

        assert_eq!(data.history, vec![(0.0, 100.0), (1.0, 100.0)]);
        assert_eq!(data.forecast, vec![(2.0, 102.0)]);
        assert_eq!(data.fitted.as_deref(), Some(&[(0.0, 99.0), (1.0, 101.0)][..]));
        assert_eq!(data.lower.as_deref(), Some(&[(2.0, 95.0)][..]));
        assert_eq!(data.upper.as_deref(), Some(&[(2.0, 109.0)][..]));
    }

    #[test]
    fn test_point_only_geometry_has_no_band() {
        let result = ForecastResult {
            model_name: "auto-sarima".to_string(),
            fitted: None,
            future: vec![ForecastPoint {
                year: 2021,
                month: Month::January,
                point: 50.0,
                lower: None,
                upper: None,
            }],
        };
        let data = ForecastChartData::new(&[40.0], &result);

        assert!(data.fitted.is_none());
        assert!(data.lower.is_none() && data.upper.is_none());
        assert_eq!(data.forecast, vec![(1.0, 50.0)]);
    }
}
