//! Filters tab: year range, month, region, and age group selection.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use dataset_facade::{AgeGroup, Month};

use crate::app::{App, FilterRow};

/// Draw the Filters tab.
pub fn draw_filters_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    draw_selection_summary(frame, chunks[0], app);
    draw_filter_list(frame, chunks[1], app);
}

fn draw_selection_summary(frame: &mut Frame, area: Rect, app: &App) {
    let spec = &app.view.spec;
    let text = format!(
        "Years {}-{}    {} of 12 months    {} of {} regions    {} of 4 age groups",
        spec.year_range.0,
        spec.year_range.1,
        spec.months.len(),
        spec.regions.len(),
        app.filters.regions.len(),
        spec.age_groups.len(),
    );

    let summary = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Selection "));

    frame.render_widget(summary, area);
}

fn draw_filter_list(frame: &mut Frame, area: Rect, app: &App) {
    let filters = &app.filters;

    let items: Vec<ListItem> = (0..filters.row_count())
        .map(|i| {
            let label = match filters.row(i) {
                FilterRow::YearLo => format!("Year from  < {} >", filters.year_lo),
                FilterRow::YearHi => format!("Year to    < {} >", filters.year_hi),
                FilterRow::Month(m) => {
                    format!("{} {}", checkbox(filters.months[m]), Month::all()[m].name())
                }
                FilterRow::Region(r) => {
                    let (region, selected) = &filters.regions[r];
                    format!("{} {}", checkbox(*selected), region)
                }
                FilterRow::Age(a) => {
                    format!("{} {}", checkbox(filters.ages[a]), AgeGroup::all()[a].label())
                }
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filters (age groups scope aggregates, not rows) "),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(filters.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}
