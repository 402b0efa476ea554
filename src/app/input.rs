use crate::app::{action::Action, state::AppState, ui};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

/// Maps a click at terminal row `row` to a picker index, if it lands on one.
pub fn resolve_clicked_row(app_state: &AppState, picker_area: Rect, row: u16) -> Option<usize> {
    // Rows start inside the top border
    if row <= picker_area.y || row >= picker_area.bottom().saturating_sub(1) {
        return None;
    }
    let offset = app_state.picker.list_state.offset();
    let idx = offset + (row - picker_area.y - 1) as usize;
    (idx < app_state.directory.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            app_state.keymap.get_action(key, app_state.has_alert())
        }
        // Mouse input is ignored while an alert is up; it must be acknowledged first.
        Event::Mouse(_) if app_state.has_alert() => None,
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let picker = ui::get_layout(area).picker;
            let inside_picker = mouse.column > picker.x
                && mouse.column < picker.right().saturating_sub(1)
                && mouse.row > picker.y
                && mouse.row < picker.bottom().saturating_sub(1);

            match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                MouseEventKind::ScrollDown => Some(Action::SelectNext),
                MouseEventKind::Down(MouseButton::Left) if inside_picker => {
                    resolve_clicked_row(app_state, picker, mouse.row).map(Action::SelectIndex)
                }
                _ => None,
            }
        }
        _ => None,
    }
}
