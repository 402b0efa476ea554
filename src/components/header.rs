use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = self.theme;

        let status = if state.has_alert() {
            Span::styled(" ERROR ", theme.status_error)
        } else if state.is_loading {
            Span::styled(format!(" {} LOADING ", state.spinner), theme.status_loading)
        } else {
            Span::styled(" READY ", theme.status_ready)
        };

        let mut spans = vec![
            Span::styled(" TICKR ", theme.header_logo),
            Span::raw(" "),
            status,
            Span::raw(" "),
        ];

        if let Some(updated) = state.last_updated {
            spans.push(Span::styled(
                format!(" Updated {} ", updated.format("%H:%M:%S")),
                theme.header_item,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
