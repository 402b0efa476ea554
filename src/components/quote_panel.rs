use crate::app::state::{QuoteView, PLACEHOLDER};
use crate::domain::models::ChangeDirection;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct QuotePanel<'a> {
    pub view: &'a QuoteView,
    /// Current spinner frame while the quote request is outstanding.
    pub spinner: Option<&'a str>,
    pub theme: &'a Theme,
}

impl QuotePanel<'_> {
    fn row<'b>(&self, label: &'b str, value: &'b str, style: Style) -> Line<'b> {
        let style = if value == PLACEHOLDER {
            self.theme.placeholder
        } else {
            style
        };
        Line::from(vec![
            Span::styled(format!(" {label:<9}"), self.theme.label),
            Span::styled(value, style),
        ])
    }
}

pub fn change_style(theme: &Theme, direction: ChangeDirection) -> Style {
    match direction {
        ChangeDirection::Up => theme.change_up,
        ChangeDirection::Down => theme.change_down,
        ChangeDirection::Flat => theme.change_flat,
    }
}

impl Widget for QuotePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let mut title = vec![
            Span::raw(" "),
            Span::styled("QUOTE", theme.panel_title),
            Span::raw(" "),
        ];
        if let Some(frame) = self.spinner {
            title.push(Span::styled(format!("{frame} "), theme.spinner));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        let view = self.view;
        let lines = vec![
            Line::from(""),
            self.row("Company", &view.company_name, theme.value),
            self.row("Symbol", &view.symbol, theme.value),
            self.row("Price", &view.price, theme.price),
            self.row("Change", &view.change, change_style(theme, view.direction)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
