//! "Add bicycle" form overlay.

use super::centered_rect;
use crate::app::{AddField, AddForm};
use crate::constants;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the add form with the type selector and location input.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, form: &AddForm) {
    let area = centered_rect(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(Span::styled(
            constants::TITLE_ADD_BICYCLE,
            Style::default().fg(theme::TITLE),
        ))
        .title_bottom(Line::from(constants::TITLE_FORM_FOOTER).centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, type_row, location_row, _, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label_style = |field: AddField| {
        if form.focus == field {
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_SECONDARY)
        }
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}", constants::LABEL_TYPE), label_style(AddField::Type)),
            Span::styled("◀ ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(
                form.kind.as_str(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(theme::TEXT_SECONDARY)),
        ])),
        type_row,
    );

    let location_label = format!(" {}", constants::LABEL_LOCATION);
    let label_width = location_label.chars().count() as u16;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(location_label, label_style(AddField::Location)),
            Span::styled(
                form.location.as_str(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ])),
        location_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(constants::HINT_TYPE_CYCLE).centered())
            .style(Style::default().fg(theme::TEXT_SECONDARY)),
        hint_row,
    );

    if form.focus == AddField::Location {
        let x = location_row.x + label_width + form.location.chars().count() as u16;
        frame.set_cursor_position((x.min(location_row.right().saturating_sub(1)), location_row.y));
    }
}
