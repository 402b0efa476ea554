use crate::domain::models::{format_number, format_price, ChangeDirection, LogoImage, Quote};

pub const PLACEHOLDER: &str = "-";

/// Label texts for the quote panel, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
    pub company_name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub direction: ChangeDirection,
}

impl QuoteView {
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            company_name: PLACEHOLDER.to_string(),
            symbol: PLACEHOLDER.to_string(),
            price: PLACEHOLDER.to_string(),
            change: PLACEHOLDER.to_string(),
            direction: ChangeDirection::Flat,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for QuoteView {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<&Quote> for QuoteView {
    fn from(quote: &Quote) -> Self {
        Self {
            company_name: quote.company_name.clone(),
            symbol: quote.symbol.clone(),
            price: format_price(quote.price),
            change: format_number(quote.change),
            direction: quote.direction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogoView {
    #[default]
    Empty,
    Loaded(LogoImage),
}
