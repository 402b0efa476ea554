use crate::app::state::LogoView;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct LogoPanel<'a> {
    pub logo: &'a LogoView,
    pub symbol: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Widget for LogoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("LOGO", theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.logo {
            LogoView::Empty => vec![
                Line::from(""),
                Line::from(Span::styled("-", theme.placeholder)),
            ],
            LogoView::Loaded(image) => {
                let mut meta = format!("{} | {}", image.format.label(), image.size_label());
                if let Some((w, h)) = image.dimensions {
                    meta.push_str(&format!(" | {w}x{h}"));
                }
                let badge = format!("  {}  ", self.symbol.unwrap_or_default());
                let pad = " ".repeat(badge.len());
                vec![
                    Line::from(""),
                    Line::from(Span::styled(pad.clone(), theme.logo_fill)),
                    Line::from(Span::styled(badge, theme.logo_fill)),
                    Line::from(Span::styled(pad, theme.logo_fill)),
                    Line::from(""),
                    Line::from(Span::styled(meta, theme.dimmed)),
                ]
            }
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
