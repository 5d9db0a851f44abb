//! Bicycle number prompt used by borrow and return.

use super::centered_rect;
use crate::app::IndexPrompt;
use crate::constants;
use crate::inventory::InventoryStore;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the prompt, a preview of the bicycle the typed number points at,
/// and the cursor after the typed digits.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, prompt: &IndexPrompt, store: &InventoryStore) {
    let area = centered_rect(52, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(Span::styled(
            prompt.action.title(),
            Style::default().fg(theme::TITLE),
        ))
        .title_bottom(Line::from(constants::TITLE_FORM_FOOTER).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [question, input, preview] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(format!(" {}", prompt.action.prompt()))
            .style(Style::default().fg(theme::TEXT_PRIMARY)),
        question,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" > ", Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(prompt.input.as_str(), Style::default().fg(theme::TEXT_PRIMARY)),
        ])),
        input,
    );

    let target = prompt.input.parse().ok().and_then(|index| store.get(index));
    if let Some(bike) = target {
        let color = if bike.available {
            theme::AVAILABLE
        } else {
            theme::BORROWED
        };
        frame.render_widget(
            Paragraph::new(format!(
                "   {} - {} - {}",
                bike.kind,
                bike.location,
                bike.status_label()
            ))
            .style(Style::default().fg(color)),
            preview,
        );
    }

    frame.set_cursor_position((input.x + 3 + prompt.input.len() as u16, input.y));
}
