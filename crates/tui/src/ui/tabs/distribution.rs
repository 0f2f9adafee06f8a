//! Distribution tab: births by age group and by region.

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders},
};

use super::overview::draw_empty_placeholder;
use crate::app::App;

/// Draw the Distribution tab.
pub fn draw_distribution_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_age_share(frame, chunks[0], app);
    draw_region_share(frame, chunks[1], app);
}

fn draw_age_share(frame: &mut Frame, area: Rect, app: &App) {
    let shares = &app.view.report.age_share;

    if shares.is_empty() || app.view.filtered.is_empty() {
        draw_empty_placeholder(frame, area, " Births by Age Group ");
        return;
    }

    let data: Vec<(&str, u64)> = shares
        .iter()
        .map(|share| (share.group.label(), share.births))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Births by Age Group "),
        )
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta));

    frame.render_widget(chart, area);
}

fn draw_region_share(frame: &mut Frame, area: Rect, app: &App) {
    let shares = &app.view.report.region_share;

    if shares.is_empty() {
        draw_empty_placeholder(frame, area, " Births by Region ");
        return;
    }

    let data: Vec<(&str, u64)> = shares
        .iter()
        .map(|share| (share.region.as_str(), share.births))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Births by Region "),
        )
        .data(&data)
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}
