use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, ErrorSeverity, ErrorState, LogoView, QuoteView},
};
use crate::domain::error::FetchError;
use chrono::Local;

pub const GENERIC_ERROR_MESSAGE: &str = "No internet connection";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let generation = match action {
        Action::QuoteLoaded(g, _)
        | Action::QuoteFailed(g, _)
        | Action::LogoLoaded(g, _)
        | Action::LogoFailed(g, _) => *g,
        _ => return UpdateResult::NotHandled,
    };

    if generation != state.generation {
        tracing::debug!(
            generation,
            current = state.generation,
            "dropping result from a previous selection"
        );
        return UpdateResult::Handled(None);
    }

    match action {
        Action::QuoteLoaded(_, quote) => {
            state.quote = QuoteView::from(quote);
            state.is_loading = false;
            state.last_updated = Some(Local::now());
        }
        Action::QuoteFailed(_, err) => {
            if err.is_malformed() && !state.report_malformed_quotes {
                // Placeholders and spinner stay up; nothing is shown to the user.
                tracing::warn!(error = %err, "ignoring malformed quote payload");
            } else {
                tracing::warn!(error = %err, "quote request failed");
                state.is_loading = false;
                push_alert(state, err);
            }
        }
        Action::LogoLoaded(_, logo) => {
            state.logo = LogoView::Loaded((**logo).clone());
        }
        Action::LogoFailed(_, err) => {
            tracing::warn!(error = %err, "logo request failed");
            push_alert(state, err);
        }
        _ => {}
    }
    UpdateResult::Handled(None)
}

/// Alerts stack; two failures in one round show two prompts.
fn push_alert(state: &mut AppState, err: &FetchError) {
    state.alerts.push(ErrorState {
        message: GENERIC_ERROR_MESSAGE.to_string(),
        detail: Some(err.to_string()),
        timestamp: Local::now(),
        severity: if err.is_malformed() {
            ErrorSeverity::Warning
        } else {
            ErrorSeverity::Error
        },
        suggestions: crate::app::recovery::get_suggestions(err),
    });
}
