//! Heatmap tab: region-by-month mean births.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use dataset_facade::Month;

use super::overview::draw_empty_placeholder;
use crate::app::App;

/// Draw the Heatmap tab.
pub fn draw_heatmap_tab(frame: &mut Frame, area: Rect, app: &App) {
    let heatmap = &app.view.report.heatmap;

    if heatmap.regions.is_empty() {
        draw_empty_placeholder(frame, area, " Mean Births by Region and Month ");
        return;
    }

    let max_value = heatmap.max_value().unwrap_or(0.0);

    let mut header_cells = vec![Cell::from("Region")];
    header_cells.extend(
        Month::all()
            .iter()
            .map(|month| Cell::from(month.short_name())),
    );
    let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = heatmap
        .regions
        .iter()
        .enumerate()
        .map(|(row_idx, region)| {
            let mut cells = vec![Cell::from(region.as_str())];
            for month in Month::all() {
                cells.push(heat_cell(heatmap.cell(row_idx, *month), max_value));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(std::iter::repeat(Constraint::Min(6)).take(12));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mean Births by Region and Month "),
    );

    frame.render_widget(table, area);
}

/// A colored cell, or the missing-value placeholder. A cell that never
/// matched any rows is not the same as a zero mean.
fn heat_cell(value: Option<f64>, max_value: f64) -> Cell<'static> {
    match value {
        Some(v) => Cell::from(format!("{v:.0}")).style(Style::default().fg(heat_color(v, max_value))),
        None => Cell::from("--").style(Style::default().fg(Color::DarkGray)),
    }
}

fn heat_color(value: f64, max_value: f64) -> Color {
    if max_value <= 0.0 {
        return Color::Blue;
    }
    let ratio = (value / max_value).clamp(0.0, 1.0);
    if ratio < 0.25 {
        Color::Blue
    } else if ratio < 0.5 {
        Color::Cyan
    } else if ratio < 0.75 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_color_buckets() {
        assert_eq!(heat_color(10.0, 100.0), Color::Blue);
        assert_eq!(heat_color(30.0, 100.0), Color::Cyan);
        assert_eq!(heat_color(60.0, 100.0), Color::Yellow);
        assert_eq!(heat_color(100.0, 100.0), Color::Red);
    }

    #[test]
    fn test_heat_color_degenerate_max() {
        assert_eq!(heat_color(5.0, 0.0), Color::Blue);
    }
}
