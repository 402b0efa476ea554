use chrono::Local;
use ratatui::{backend::TestBackend, Terminal};
use tickr::app::state::{AppState, ErrorSeverity, ErrorState, LogoView, QuoteView};
use tickr::app::ui;
use tickr::domain::models::{LogoImage, Quote};

fn sweep(label: &str, app_state: &mut AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
    println!("{label}: ok");
}

fn main() {
    let mut app_state = AppState::default();
    app_state.is_loading = true;
    sweep("loading", &mut app_state);

    app_state.is_loading = false;
    app_state.quote = QuoteView::from(&Quote {
        company_name: "Apple Inc.".to_string(),
        symbol: "AAPL".to_string(),
        price: 150.0,
        change: -1.5,
    });
    app_state.logo = LogoView::Loaded(LogoImage::from_bytes(vec![0x89, b'P', b'N', b'G']));
    app_state.last_updated = Some(Local::now());
    sweep("loaded", &mut app_state);

    for _ in 0..2 {
        app_state.alerts.push(ErrorState {
            message: "No internet connection".to_string(),
            detail: Some("request failed with HTTP status 503 and a fairly long explanation that needs wrapping".to_string()),
            timestamp: Local::now(),
            severity: ErrorSeverity::Error,
            suggestions: vec!["Check your network connection.".to_string()],
        });
    }
    sweep("alerts", &mut app_state);

    println!("Layout verification complete. No panics.");
}
