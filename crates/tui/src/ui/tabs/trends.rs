//! Trends tab: per-year series by age group and by region.

use ratatui::prelude::*;

use super::overview::draw_empty_placeholder;
use crate::app::App;
use crate::widgets::create_trend_chart;

/// Draw the Trends tab.
pub fn draw_trends_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let report = &app.view.report;

    if report.age_trend.is_empty() || app.view.filtered.is_empty() {
        draw_empty_placeholder(frame, chunks[0], " Age Group Trend ");
    } else {
        let chart = create_trend_chart("Age Group Trend", &app.view.age_chart);
        frame.render_widget(chart, chunks[0]);
    }

    if report.region_trend.is_empty() {
        draw_empty_placeholder(frame, chunks[1], " Region Trend ");
    } else {
        let chart = create_trend_chart("Region Trend", &app.view.region_chart);
        frame.render_widget(chart, chunks[1]);
    }
}
