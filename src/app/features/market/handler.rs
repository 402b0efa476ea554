use crate::app::{action::Action, command::Command};
use crate::domain::market::MarketFacade;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    adapter: Arc<dyn MarketFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::FetchSymbol { generation, symbol } => {
            // Quote and logo are independent; neither waits for the other.
            let quote_adapter = adapter.clone();
            let quote_tx = tx.clone();
            let quote_symbol = symbol.clone();
            tokio::spawn(async move {
                let action = match quote_adapter.fetch_quote(&quote_symbol).await {
                    Ok(quote) => Action::QuoteLoaded(generation, quote),
                    Err(e) => Action::QuoteFailed(generation, e),
                };
                let _ = quote_tx.send(action).await;
            });

            tokio::spawn(async move {
                let action = match adapter.fetch_logo(&symbol).await {
                    Ok(logo) => Action::LogoLoaded(generation, Box::new(logo)),
                    Err(e) => Action::LogoFailed(generation, e),
                };
                let _ = tx.send(action).await;
            });
        }
    }
    Ok(())
}
