use crate::app::command::Command;
use crate::domain::{
    error::FetchError,
    models::{LogoImage, Quote},
};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Picker ---
    SelectNext,
    SelectPrev,
    SelectIndex(usize),
    Reload, // Re-issue both fetches for the current row

    // --- Alerts ---
    DismissAlert,

    // --- Async Results (The "Callback") ---
    // Each carries the generation of the fetch round that produced it
    QuoteLoaded(u64, Quote),
    QuoteFailed(u64, FetchError),
    LogoLoaded(u64, Box<LogoImage>),
    LogoFailed(u64, FetchError),
}
