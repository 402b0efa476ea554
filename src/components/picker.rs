use crate::domain::models::CompanyDirectory;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget},
};

pub struct CompanyPicker<'a> {
    pub directory: &'a CompanyDirectory,
    pub theme: &'a Theme,
}

impl StatefulWidget for CompanyPicker<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let theme = self.theme;
        let items: Vec<ListItem> = self
            .directory
            .iter()
            .map(|company| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<11}", company.display_name)),
                    Span::styled(format!("{:>5}", company.symbol), theme.dimmed),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("COMPANIES", theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        List::new(items)
            .block(block)
            .style(theme.list_item)
            .highlight_style(theme.list_selected)
            .highlight_symbol("> ")
            .render(area, buf, state);
    }
}
