//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, BackendKind, Tab};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let tab_help = match app.current_tab {
        Tab::Overview | Tab::Distribution | Tab::Trends | Tab::Heatmap => "[←→] Navigate",
        Tab::Forecast => {
            if app.forecast.backend == BackendKind::AutoSarima {
                "[f] Fit  [m] Back-end  [r] Region  [↑↓] Horizon"
            } else {
                "[f] Fit  [m] Back-end  [↑↓] Horizon"
            }
        }
        Tab::Filters => "[↑↓] Row  [Space] Toggle  [←→] Year  [a] Select all",
    };
    let help_text = format!("{tab_help}  |  [1-6] Tab  [Tab] Next  [q] Quit");

    // Add status message if present
    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text)
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
