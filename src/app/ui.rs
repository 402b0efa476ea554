use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::logo_panel::LogoPanel;
use crate::components::modals::error::ErrorModal;
use crate::components::picker::CompanyPicker;
use crate::components::quote_panel::QuotePanel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const PICKER_WIDTH: u16 = 24;
const QUOTE_PANEL_HEIGHT: u16 = 8;

pub struct AppLayout {
    pub header: Rect,
    pub picker: Rect,
    pub quote: Rect,
    pub logo: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PICKER_WIDTH), Constraint::Min(0)])
        .split(main[1]);

    let detail = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(QUOTE_PANEL_HEIGHT), Constraint::Min(0)])
        .split(body[1]);

    AppLayout {
        header: main[0],
        picker: body[0],
        quote: detail[0],
        logo: detail[1],
        footer: main[2],
    }
}

fn has_room(area: Rect) -> bool {
    area.width > 0 && area.height > 0
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if !has_room(f.area()) {
        return;
    }

    let layout = get_layout(f.area());
    let theme = &app_state.theme;

    if has_room(layout.header) {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    if has_room(layout.picker) {
        let picker = CompanyPicker {
            directory: &app_state.directory,
            theme,
        };
        f.render_stateful_widget(picker, layout.picker, &mut app_state.picker.list_state);
    }

    if has_room(layout.quote) {
        f.render_widget(
            QuotePanel {
                view: &app_state.quote,
                spinner: app_state.is_loading.then_some(app_state.spinner.as_str()),
                theme,
            },
            layout.quote,
        );
    }

    if has_room(layout.logo) {
        f.render_widget(
            LogoPanel {
                logo: &app_state.logo,
                symbol: app_state.selected_company().map(|c| c.symbol.0.as_str()),
                theme,
            },
            layout.logo,
        );
    }

    if has_room(layout.footer) {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // Only the topmost alert is drawn; the rest wait underneath it.
    if let Some(alert) = app_state.alerts.last() {
        f.render_widget(
            ErrorModal {
                theme,
                error: alert,
                pending: app_state.alerts.len() - 1,
            },
            f.area(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::command::Command;
    use crate::app::reducer::update;
    use crate::domain::{error::FetchError, models::Quote};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn render(state: &mut AppState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let area = buf.area;
        let chars: Vec<String> = needle.chars().map(String::from).collect();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let matches = chars.iter().enumerate().all(|(i, c)| {
                    let col = x + i as u16;
                    col < area.right() && buf[(col, y)].symbol() == c
                });
                if matches {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn loaded_state(price: f64, change: f64) -> AppState {
        let mut state = AppState::default();
        let Some(Command::FetchSymbol { generation, .. }) =
            update(&mut state, Action::SelectIndex(0))
        else {
            panic!("expected a fetch");
        };
        update(
            &mut state,
            Action::QuoteLoaded(
                generation,
                Quote {
                    company_name: "Apple Inc.".to_string(),
                    symbol: "AAPL".to_string(),
                    price,
                    change,
                },
            ),
        );
        state
    }

    #[test]
    fn test_renders_quote_labels_and_down_color() {
        let mut state = loaded_state(150.0, -1.5);
        let buf = render(&mut state, 80, 24);

        assert!(find(&buf, "Apple Inc.").is_some());
        assert!(find(&buf, "150.0 $").is_some());
        let (x, y) = find(&buf, "-1.5").expect("change label");
        assert_eq!(buf[(x, y)].fg, state.theme.change_down.fg.unwrap());
    }

    #[test]
    fn test_renders_up_and_flat_colors() {
        let mut state = loaded_state(150.0, 2.3);
        let buf = render(&mut state, 80, 24);
        let (x, y) = find(&buf, "2.3").unwrap();
        assert_eq!(buf[(x, y)].fg, state.theme.change_up.fg.unwrap());

        let mut state = loaded_state(99.5, 0.0);
        let buf = render(&mut state, 80, 24);
        let (x, y) = find(&buf, "0.0").unwrap();
        let fg = buf[(x, y)].fg;
        assert_eq!(fg, state.theme.change_flat.fg.unwrap_or(Color::Reset));
        assert_ne!(fg, state.theme.change_up.fg.unwrap());
        assert_ne!(fg, state.theme.change_down.fg.unwrap());
    }

    #[test]
    fn test_renders_picker_rows_in_order() {
        let mut state = AppState::default();
        let buf = render(&mut state, 80, 24);
        let rows: Vec<u16> = ["Apple", "Microsoft", "Google", "Amazon", "Facebook"]
            .iter()
            .map(|name| find(&buf, name).expect(name).1)
            .collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_renders_alert_modal() {
        let mut state = AppState::default();
        let Some(Command::FetchSymbol { generation, .. }) = update(&mut state, Action::Reload)
        else {
            panic!("expected a fetch");
        };
        update(&mut state, Action::QuoteFailed(generation, FetchError::HttpStatus(404)));
        let buf = render(&mut state, 80, 24);
        assert!(find(&buf, "No internet connection").is_some());
        assert!(find(&buf, "OK").is_some());
    }

    #[test]
    fn test_tiny_terminals_do_not_panic() {
        let mut state = loaded_state(150.0, 1.0);
        state.alerts.push(crate::app::state::ErrorState {
            message: "No internet connection".to_string(),
            detail: Some("unexpected HTTP status 500".to_string()),
            timestamp: chrono::Local::now(),
            severity: crate::app::state::ErrorSeverity::Error,
            suggestions: vec!["try later".to_string()],
        });
        for width in 0..40 {
            for height in 0..16 {
                render(&mut state, width, height);
            }
        }
    }
}
