use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, LogoView, QuoteView},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => UpdateResult::Handled(move_selection(state, 1)),
        Action::SelectPrev => UpdateResult::Handled(move_selection(state, -1)),
        Action::SelectIndex(idx) => {
            if *idx < state.directory.len() {
                state.picker.select(*idx);
                UpdateResult::Handled(begin_fetch(state))
            } else {
                UpdateResult::Handled(None)
            }
        }
        Action::Reload => UpdateResult::Handled(begin_fetch(state)),
        _ => UpdateResult::NotHandled,
    }
}

fn move_selection(state: &mut AppState, delta: isize) -> Option<Command> {
    let len = state.directory.len();
    if len == 0 {
        return None;
    }
    let next = match state.picker.selected() {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    };
    state.picker.select(next);
    begin_fetch(state)
}

/// Enters LOADING for the selected row: placeholders up, spinner on, and a
/// new generation so late results from earlier rounds are ignored.
pub fn begin_fetch(state: &mut AppState) -> Option<Command> {
    let symbol = state.selected_company()?.symbol.clone();

    state.generation = state.generation.wrapping_add(1);
    state.quote = QuoteView::placeholder();
    state.logo = LogoView::Empty;
    state.is_loading = true;

    tracing::debug!(%symbol, generation = state.generation, "starting fetch round");
    Some(Command::FetchSymbol {
        generation: state.generation,
        symbol,
    })
}
