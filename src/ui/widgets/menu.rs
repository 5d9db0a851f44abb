//! Numbered main menu panel.

use crate::constants;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the numbered menu options.
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(Span::styled(
            constants::TITLE_MAIN_MENU,
            Style::default()
                .fg(theme::TITLE)
                .add_modifier(Modifier::BOLD),
        ));

    let items: Vec<ListItem> = constants::MENU_ITEMS
        .iter()
        .map(|(key, label)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {key} "),
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(*label, Style::default().fg(theme::TEXT_PRIMARY)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
