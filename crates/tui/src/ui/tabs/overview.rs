//! Overview tab: KPI tiles, yearly totals, monthly averages.

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Paragraph, Row, Table},
};

use crate::app::App;
use crate::view::{format_count, format_mean};

/// Draw the Overview tab.
pub fn draw_overview_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // KPI tiles
            Constraint::Min(8),    // Yearly totals
            Constraint::Length(5), // Monthly averages
        ])
        .split(area);

    draw_kpi_tiles(frame, chunks[0], app);
    draw_yearly_totals(frame, chunks[1], app);
    draw_monthly_averages(frame, chunks[2], app);
}

fn draw_kpi_tiles(frame: &mut Frame, area: Rect, app: &App) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let kpis = &app.view.report.kpis;

    // Truncated, not rounded
    let avg = match kpis.avg_per_region {
        Some(value) => format_count(value.trunc() as u64),
        None => "N/A".to_string(),
    };
    let top_region = kpis.top_region.as_deref().unwrap_or("N/A");
    let dominant = kpis
        .dominant_age_group
        .map(|g| g.label())
        .unwrap_or("N/A");

    let values = [
        ("Total Births", format_count(kpis.total_births)),
        ("Avg / Region", avg),
        ("Top Region", top_region.to_string()),
        ("Dominant Age", dominant.to_string()),
    ];

    for (i, (label, value)) in values.iter().enumerate() {
        let tile = Paragraph::new(value.as_str())
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {label} ")),
            );
        frame.render_widget(tile, tiles[i]);
    }
}

fn draw_yearly_totals(frame: &mut Frame, area: Rect, app: &App) {
    let yearly = &app.view.report.yearly;

    if yearly.is_empty() {
        draw_empty_placeholder(frame, area, " Births per Year ");
        return;
    }

    let labels: Vec<String> = yearly.iter().map(|row| row.year.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(yearly.iter().map(|row| row.births))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Births per Year "),
        )
        .data(&data)
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

fn draw_monthly_averages(frame: &mut Frame, area: Rect, app: &App) {
    let monthly = &app.view.report.monthly_avg;

    let header = Row::new(
        monthly
            .iter()
            .map(|entry| entry.month.short_name().to_string())
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    // Months with no rows show the placeholder, never a zero
    let values = Row::new(
        monthly
            .iter()
            .map(|entry| format_mean(entry.mean))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Cyan));

    let widths = vec![Constraint::Ratio(1, 12); 12];
    let table = Table::new(vec![values], widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mean Births per Month "),
    );

    frame.render_widget(table, area);
}

pub(super) fn draw_empty_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let placeholder = Paragraph::new("No rows in the current selection")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(placeholder, area);
}
