//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, BackendKind, Tab};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global shortcuts
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            app.goto_tab(c as u8 - b'0');
            return;
        }
        _ => {}
    }

    // The Filters tab owns the arrow keys; everywhere else they navigate tabs
    match app.current_tab {
        Tab::Forecast => handle_forecast_tab_keys(app, key),
        Tab::Filters => handle_filters_tab_keys(app, key),
        _ => handle_browse_keys(app, key),
    }
}

fn handle_browse_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        _ => {}
    }
}

fn handle_forecast_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') | KeyCode::Enter => {
            if app.view.filtered.is_empty() {
                app.set_status("Selection is empty. Adjust filters first.");
            } else if app.forecast.pending {
                // Already queued
            } else {
                app.forecast.pending = true;
                app.set_status(format!("Fitting {}...", app.forecast.backend.name()));
            }
        }
        KeyCode::Char('m') => {
            app.forecast.toggle_backend();
            app.set_status(format!("Back-end: {}", app.forecast.backend.name()));
        }
        KeyCode::Char('r') => {
            if app.forecast.backend == BackendKind::AutoSarima {
                let count = app.view.regions().len();
                if count > 0 {
                    app.forecast.region_idx = (app.forecast.region_idx + 1) % count;
                    app.forecast.clear_result();
                }
            }
        }
        KeyCode::Up => app.forecast.horizon_up(),
        KeyCode::Down => app.forecast.horizon_down(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        _ => {}
    }
}

fn handle_filters_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.filters.cursor_up(),
        KeyCode::Down => app.filters.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.filters.toggle_current() {
                app.refresh_view();
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.filters.adjust_current(-1) {
                app.refresh_view();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if app.filters.adjust_current(1) {
                app.refresh_view();
            }
        }
        KeyCode::Char('a') => {
            app.filters.reset();
            app.refresh_view();
            app.set_status("Filters reset to full selection");
        }
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use dataset_facade::{BirthRecord, BirthTable};
    use std::sync::Arc;

    fn app() -> App {
        let mut records = Vec::new();
        for year in 2019..=2021 {
            records.push(BirthRecord::new(year, "January", "East", 100, 10, 40, 30, 20));
        }
        App::new(Arc::new(BirthTable::new(records)))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_jumps_to_tab() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.current_tab, Tab::Heatmap);
    }

    #[test]
    fn test_arrows_navigate_outside_filters() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.current_tab, Tab::Distribution);
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.current_tab, Tab::Overview);
    }

    #[test]
    fn test_arrows_move_cursor_inside_filters() {
        let mut app = app();
        app.current_tab = Tab::Filters;
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.filters.cursor, 1);
        assert_eq!(app.current_tab, Tab::Filters);
    }

    #[test]
    fn test_forecast_enter_defers_the_fit() {
        let mut app = app();
        app.current_tab = Tab::Forecast;
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert!(app.forecast.pending);
        assert!(app.forecast.result.is_none());
    }

    #[test]
    fn test_forecast_backend_toggle() {
        let mut app = app();
        app.current_tab = Tab::Forecast;
        handle_key_event(&mut app, press(KeyCode::Char('m')));
        assert_eq!(app.forecast.backend, BackendKind::AutoSarima);
    }

    #[test]
    fn test_month_toggle_refreshes_view() {
        let mut app = app();
        app.current_tab = Tab::Filters;
        app.filters.cursor = 2; // January, the only populated month
        handle_key_event(&mut app, press(KeyCode::Char(' ')));
        assert!(app.view.filtered.is_empty());
    }
}
