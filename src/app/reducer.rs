use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::navigation::update,
        features::market::update,
        features::ui::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::market::actions::GENERIC_ERROR_MESSAGE;
    use crate::app::state::{LogoView, PLACEHOLDER};
    use crate::domain::{
        error::FetchError,
        models::{png_fixture, ChangeDirection, LogoImage, Quote, Symbol},
    };

    fn apple(change: f64) -> Quote {
        Quote {
            company_name: "Apple Inc.".to_string(),
            symbol: "AAPL".to_string(),
            price: 150.0,
            change,
        }
    }

    fn start(state: &mut AppState, idx: usize) -> u64 {
        match update(state, Action::SelectIndex(idx)) {
            Some(Command::FetchSymbol { generation, .. }) => generation,
            None => panic!("selection did not start a fetch"),
        }
    }

    fn assert_placeholders(state: &AppState) {
        assert_eq!(state.quote.company_name, PLACEHOLDER);
        assert_eq!(state.quote.symbol, PLACEHOLDER);
        assert_eq!(state.quote.price, PLACEHOLDER);
        assert_eq!(state.quote.change, PLACEHOLDER);
    }

    #[test]
    fn test_every_row_fetches_its_symbol() {
        let mut state = AppState::default();
        let expected = ["AAPL", "MSFT", "GOOG", "AMZN", "FB"];
        for (idx, sym) in expected.iter().enumerate() {
            let cmd = update(&mut state, Action::SelectIndex(idx));
            assert_eq!(
                cmd,
                Some(Command::FetchSymbol {
                    generation: state.generation,
                    symbol: Symbol::from(*sym),
                })
            );
        }
    }

    #[test]
    fn test_quote_success_renders_negative_change() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);
        assert!(state.is_loading);

        update(&mut state, Action::QuoteLoaded(generation, apple(-1.5)));

        assert!(!state.is_loading);
        assert_eq!(state.quote.company_name, "Apple Inc.");
        assert_eq!(state.quote.symbol, "AAPL");
        assert_eq!(state.quote.price, "150.0 $");
        assert_eq!(state.quote.change, "-1.5");
        assert_eq!(state.quote.direction, ChangeDirection::Down);
        assert!(state.last_updated.is_some());
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn test_change_direction_from_quote() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);
        update(&mut state, Action::QuoteLoaded(generation, apple(0.0)));
        assert_eq!(state.quote.direction, ChangeDirection::Flat);
        assert_eq!(state.quote.change, "0.0");

        let generation = start(&mut state, 0);
        update(&mut state, Action::QuoteLoaded(generation, apple(2.3)));
        assert_eq!(state.quote.direction, ChangeDirection::Up);
        assert_eq!(state.quote.change, "2.3");
    }

    #[test]
    fn test_quote_status_error_shows_alert_and_keeps_placeholders() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);

        update(
            &mut state,
            Action::QuoteFailed(generation, FetchError::HttpStatus(404)),
        );

        assert!(!state.is_loading);
        assert_placeholders(&state);
        assert_eq!(state.alerts.len(), 1);
        assert_eq!(state.alerts[0].message, GENERIC_ERROR_MESSAGE);
        assert!(!state.alerts[0].suggestions.is_empty());
    }

    #[test]
    fn test_malformed_quote_is_swallowed() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);

        update(
            &mut state,
            Action::QuoteFailed(
                generation,
                FetchError::MalformedPayload("missing field `latestPrice`".to_string()),
            ),
        );

        assert!(state.alerts.is_empty());
        assert_placeholders(&state);
        // The spinner is not stopped on this path.
        assert!(state.is_loading);
    }

    #[test]
    fn test_malformed_quote_reported_when_enabled() {
        let mut state = AppState {
            report_malformed_quotes: true,
            ..AppState::default()
        };
        let generation = start(&mut state, 0);

        update(
            &mut state,
            Action::QuoteFailed(generation, FetchError::MalformedPayload("bad".to_string())),
        );

        assert_eq!(state.alerts.len(), 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_logo_is_independent_of_quote() {
        let mut state = AppState::default();
        let generation = start(&mut state, 2);

        let logo = LogoImage::from_bytes(png_fixture(10, 10));
        update(&mut state, Action::LogoLoaded(generation, Box::new(logo.clone())));
        assert_eq!(state.logo, LogoView::Loaded(logo));
        // Spinner only follows the quote.
        assert!(state.is_loading);
        assert_placeholders(&state);
    }

    #[test]
    fn test_logo_failure_alerts_without_stopping_spinner() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);

        update(&mut state, Action::LogoFailed(generation, FetchError::EmptyBody));
        assert_eq!(state.alerts.len(), 1);
        assert!(state.is_loading);
    }

    #[test]
    fn test_double_failure_stacks_two_alerts() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);
        let down = FetchError::Transport("connection refused".to_string());

        update(&mut state, Action::QuoteFailed(generation, down.clone()));
        update(&mut state, Action::LogoFailed(generation, down));
        assert_eq!(state.alerts.len(), 2);

        update(&mut state, Action::DismissAlert);
        assert_eq!(state.alerts.len(), 1);
        update(&mut state, Action::DismissAlert);
        assert!(state.alerts.is_empty());
        update(&mut state, Action::DismissAlert);
        assert!(state.alerts.is_empty());
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = AppState::default();
        let old = start(&mut state, 0);
        let current = start(&mut state, 1);
        assert_ne!(old, current);

        update(&mut state, Action::QuoteLoaded(old, apple(1.0)));
        update(&mut state, Action::LogoFailed(old, FetchError::HttpStatus(500)));
        assert_placeholders(&state);
        assert!(state.alerts.is_empty());
        assert!(state.is_loading);

        update(
            &mut state,
            Action::QuoteLoaded(
                current,
                Quote {
                    company_name: "Microsoft Corporation".to_string(),
                    symbol: "MSFT".to_string(),
                    price: 300.5,
                    change: 0.0,
                },
            ),
        );
        assert_eq!(state.quote.symbol, "MSFT");
    }

    #[test]
    fn test_reselecting_same_row_is_two_fresh_rounds() {
        let mut state = AppState::default();
        let mut shown = Vec::new();

        for _ in 0..2 {
            let generation = start(&mut state, 0);
            assert_placeholders(&state);
            assert_eq!(state.logo, LogoView::Empty);
            update(&mut state, Action::QuoteLoaded(generation, apple(-1.5)));
            shown.push(state.quote.clone());
        }

        assert_eq!(shown[0], shown[1]);
    }

    #[test]
    fn test_new_selection_resets_previous_display() {
        let mut state = AppState::default();
        let generation = start(&mut state, 0);
        update(&mut state, Action::QuoteLoaded(generation, apple(2.0)));
        update(
            &mut state,
            Action::LogoLoaded(generation, Box::new(LogoImage::from_bytes(vec![1, 2, 3]))),
        );

        start(&mut state, 3);
        assert_placeholders(&state);
        assert_eq!(state.logo, LogoView::Empty);
        assert!(state.is_loading);
    }

    #[test]
    fn test_tick_animates_spinner_only_while_loading() {
        let mut state = AppState::default();
        let before = state.spinner.clone();
        update(&mut state, Action::Tick);
        assert_eq!(state.spinner, before);

        start(&mut state, 0);
        update(&mut state, Action::Tick);
        assert_ne!(state.spinner, before);
        assert_eq!(state.frame_count, 2);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert!(update(&mut state, Action::Quit).is_none());
        assert!(state.should_quit);
    }
}
