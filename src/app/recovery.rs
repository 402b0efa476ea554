use crate::domain::error::FetchError;

#[must_use]
pub fn get_suggestions(err: &FetchError) -> Vec<String> {
    let mut suggestions = Vec::new();

    match err {
        FetchError::Transport(msg) => {
            suggestions.push("Check your network connection".to_string());
            if msg.to_lowercase().contains("timed out") {
                suggestions.push(
                    "Raise request_timeout_secs in ~/.config/tickr/config.toml".to_string(),
                );
            }
        }
        FetchError::HttpStatus(401 | 403) => {
            suggestions.push(
                "Check api_token in ~/.config/tickr/config.toml or TICKR_API_TOKEN".to_string(),
            );
        }
        FetchError::HttpStatus(404) => {
            suggestions.push("The service does not recognize this symbol".to_string());
        }
        FetchError::HttpStatus(429) => {
            suggestions.push("Rate limited; wait a moment and press r to reload".to_string());
        }
        FetchError::HttpStatus(code) if *code >= 500 => {
            suggestions.push("The quote service is having trouble; try again later".to_string());
        }
        FetchError::HttpStatus(_) | FetchError::MalformedPayload(_) | FetchError::EmptyBody => {}
    }

    suggestions
}
