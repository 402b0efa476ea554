use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
    /// Alerts stacked underneath this one.
    pub pending: usize,
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = match self.error.severity {
            ErrorSeverity::Warning => self.theme.status_warn,
            ErrorSeverity::Error => self.theme.status_error,
        };

        let timestamp = self.error.timestamp.format("%H:%M:%S").to_string();

        let mut text_lines = vec![
            Line::from(""),
            Line::from(Span::styled(&self.error.message, self.theme.value)),
        ];
        if let Some(detail) = &self.error.detail {
            text_lines.push(Line::from(Span::styled(detail, self.theme.dimmed)));
        }
        text_lines.push(Line::from(Span::styled(
            format!("Occurred at: {timestamp}"),
            self.theme.dimmed,
        )));

        for suggestion in &self.error.suggestions {
            text_lines.push(Line::from(vec![
                Span::styled("* ", self.theme.label),
                Span::styled(suggestion, self.theme.list_item),
            ]));
        }

        if self.pending > 0 {
            text_lines.push(Line::from(Span::styled(
                format!("{} more alert(s) waiting", self.pending),
                self.theme.label,
            )));
        }

        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled("[ OK ]", self.theme.list_selected)));

        // Lines plus top and bottom border.
        let height = text_lines.len() as u16 + 2;
        let modal_area = centered_rect_fixed_height(60, height, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area, self.theme.shadow);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" Error ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(title_style);

        Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(modal_area, buf);
    }
}
