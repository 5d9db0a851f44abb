//! Footer widget with context-aware keybinding hints

use crate::app::{App, Mode};
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the footer with shortcuts for the current mode
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    render_hints(frame, area, &hints(app));
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.mode {
        Mode::AddForm(_) => vec![
            ("Tab", "Switch field"),
            ("←→", "Type"),
            ("Enter", "Add"),
            ("Esc", "Cancel"),
        ],
        Mode::IndexPrompt(_) => vec![("0-9", "Number"), ("Enter", "Confirm"), ("Esc", "Back")],
        Mode::Menu => {
            let mut hints = vec![("1-5", "Menu")];
            // Row shortcuts need a non-empty fleet
            if !app.store.is_empty() {
                hints.extend_from_slice(&[("↑↓", "Select"), ("b", "Borrow"), ("r", "Return")]);
            }
            hints.push(("q", "Quit"));
            hints
        }
    }
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(area);

    // 1. Render hints on the left
    let mut hint_spans = Vec::new();
    let mut current_width = 0;
    let max_width = left.width as usize;

    hint_spans.push(Span::raw(" "));
    current_width += 1;

    for (i, (key, action)) in hints.iter().enumerate() {
        // "key" + " " + "action" + " │ " separator for i > 0
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), left);

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::TEXT_SECONDARY),
    )]);
    frame.render_widget(Paragraph::new(branding).alignment(Alignment::Right), right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryStore;

    #[test]
    fn test_row_hints_need_bicycles() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new(dir.path().join("b.txt"), 10);
        let empty = App::new(InventoryStore::new(dir.path().join("e.txt"), 10));
        assert!(!hints(&empty).iter().any(|(k, _)| *k == "b"));

        store.add("city", "a").unwrap();
        let app = App::new(store);
        assert!(hints(&app).iter().any(|(k, _)| *k == "b"));
    }
}
