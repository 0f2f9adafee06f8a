//! Forecast tab: back-end controls, chart, and summary.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use forecast_facade::{
    ForecastResult, SARIMA_HORIZON_MAX, SARIMA_HORIZON_MIN, TREND_HORIZON_MAX, TREND_HORIZON_MIN,
};

use crate::app::{App, BackendKind};
use crate::widgets::create_forecast_chart;

/// Draw the Forecast tab.
pub fn draw_forecast_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Controls
            Constraint::Min(10),   // Chart
            Constraint::Length(8), // Summary table
        ])
        .split(area);

    draw_forecast_controls(frame, chunks[0], app);
    draw_forecast_chart_widget(frame, chunks[1], app);
    draw_forecast_summary(frame, chunks[2], app);
}

fn draw_forecast_controls(frame: &mut Frame, area: Rect, app: &App) {
    let backend_list: String = BackendKind::all()
        .iter()
        .map(|b| {
            if *b == app.forecast.backend {
                format!("[{}]", b.name())
            } else {
                b.name().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let (lo, hi) = match app.forecast.backend {
        BackendKind::SeasonalTrend => (TREND_HORIZON_MIN, TREND_HORIZON_MAX),
        BackendKind::AutoSarima => (SARIMA_HORIZON_MIN, SARIMA_HORIZON_MAX),
    };

    let input = match app.forecast.backend {
        BackendKind::SeasonalTrend => "whole selection".to_string(),
        BackendKind::AutoSarima => {
            let regions = app.view.regions();
            regions
                .get(app.forecast.region_idx)
                .cloned()
                .unwrap_or_else(|| "--".to_string())
        }
    };

    let text = format!(
        "Back-end: {}    Input: {}    Horizon: {} ({}-{})    [f] Fit",
        backend_list, input, app.forecast.horizon, lo, hi
    );

    let controls = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Forecast "));

    frame.render_widget(controls, area);
}

fn draw_forecast_chart_widget(frame: &mut Frame, area: Rect, app: &App) {
    if app.forecast.pending {
        let busy = Paragraph::new(format!(
            "Fitting {}... the grid search can take a moment",
            app.forecast.backend.name()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Forecast "));
        frame.render_widget(busy, area);
        return;
    }

    if let (Some(result), Some(chart)) = (&app.forecast.result, &app.forecast.chart) {
        frame.render_widget(create_forecast_chart(chart, &result.model_name), area);
    } else if let Some(error) = &app.forecast.error {
        let message = Paragraph::new(error.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title(" Forecast "));
        frame.render_widget(message, area);
    } else {
        let placeholder = Paragraph::new(format!(
            "Press [f] to fit {} over {} months",
            app.forecast.backend.name(),
            app.forecast.horizon
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Forecast "));
        frame.render_widget(placeholder, area);
    }
}

fn draw_forecast_summary(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(result) = &app.forecast.result {
        let rows: Vec<Row> = summary_cells(result).into_iter().map(Row::new).collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(12),
            ],
        )
        .header(
            Row::new(vec!["Date", "Forecast", "Lower Bound", "Upper Bound"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Forecast Summary ({}, {} months) ",
            result.model_name,
            result.future.len()
        )));

        frame.render_widget(table, area);
    } else {
        let placeholder = Paragraph::new("Fit a model to see the summary")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Forecast Summary "),
            );
        frame.render_widget(placeholder, area);
    }
}

/// One display row per future month, bounds as `--` where the back-end
/// provides none.
fn summary_cells(result: &ForecastResult) -> Vec<Vec<String>> {
    let bound = |value: Option<f64>| match value {
        Some(v) => format!("{v:.0}"),
        None => "--".to_string(),
    };

    result
        .future
        .iter()
        .map(|row| {
            vec![
                row.label(),
                format!("{:.0}", row.point),
                bound(row.lower),
                bound(row.upper),
            ]
        })
        .collect()
}
