use super::error::FetchError;
use super::models::{LogoImage, Quote, Symbol};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketFacade: Send + Sync {
    // Latest quote for a ticker
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, FetchError>;

    // Company logo image bytes
    async fn fetch_logo(&self, symbol: &Symbol) -> Result<LogoImage, FetchError>;
}
