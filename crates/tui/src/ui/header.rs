//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the header bar with title and selection summary.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "natality-tui v0.1.0 - Regional Births Dashboard   [{} of {} rows selected]",
        app.view.filtered.len(),
        app.table.len()
    );

    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
