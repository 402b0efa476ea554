use crate::app::config::AppConfig;
use crate::domain::{
    error::FetchError,
    market::MarketFacade,
    models::{LogoImage, Quote, Symbol},
};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Fields of the quote payload this app reads. Everything else is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuotePayload {
    company_name: String,
    symbol: String,
    latest_price: f64,
    change: f64,
}

impl From<QuotePayload> for Quote {
    fn from(p: QuotePayload) -> Self {
        Self {
            company_name: p.company_name,
            symbol: p.symbol,
            price: p.latest_price,
            change: p.change,
        }
    }
}

pub struct IexAdapter {
    client: reqwest::Client,
    quote_base_url: String,
    logo_base_url: String,
    api_token: String,
}

impl IexAdapter {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("tickr/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            quote_base_url: config.quote_base_url.trim_end_matches('/').to_string(),
            logo_base_url: config.logo_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone().unwrap_or_default(),
        })
    }

    fn quote_url(&self, symbol: &Symbol) -> String {
        format!("{}/stock/{}/quote", self.quote_base_url, symbol)
    }

    fn logo_url(&self, symbol: &Symbol) -> String {
        format!("{}/logos/{}.png", self.logo_base_url, symbol)
    }

    async fn get_ok_body(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        // Exactly 200; other 2xx codes are treated as failures too.
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl MarketFacade for IexAdapter {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, FetchError> {
        let url = self.quote_url(symbol);
        tracing::debug!(%symbol, %url, "requesting quote");

        let request = self
            .client
            .get(&url)
            .query(&[("token", self.api_token.as_str())]);
        let body = self.get_ok_body(request).await?;

        let payload: QuotePayload = serde_json::from_slice(&body)
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;
        Ok(payload.into())
    }

    async fn fetch_logo(&self, symbol: &Symbol) -> Result<LogoImage, FetchError> {
        let url = self.logo_url(symbol);
        tracing::debug!(%symbol, %url, "requesting logo");

        let body = self.get_ok_body(self.client.get(&url)).await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(LogoImage::from_bytes(body))
    }
}
