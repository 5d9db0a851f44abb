//! Main screen: title bar, numbered menu, bicycle list, and footer.

use crate::app::App;
use crate::constants;
use crate::state::BicycleRecord;
use crate::theme;
use crate::ui::widgets::{footer, menu};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header);

    let [menu_area, list_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).areas(body);
    menu::render(frame, menu_area);
    render_bicycles(frame, app, list_area);

    footer::render(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(area);

    let title = Line::from(Span::styled(
        format!("====={}=====", constants::TITLE_MAIN_MENU),
        Style::default()
            .fg(theme::TITLE)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), left);

    let counts = Line::from(vec![
        Span::styled(
            format!("{} available", app.store.available_count()),
            Style::default().fg(theme::AVAILABLE),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{} borrowed", app.store.borrowed_count()),
            Style::default().fg(theme::BORROWED),
        ),
        Span::styled(" ", Style::default()),
    ]);
    frame.render_widget(Paragraph::new(counts).alignment(Alignment::Right), right);
}

fn render_bicycles(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.list_focused {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_DEFAULT
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            constants::TITLE_BICYCLES,
            Style::default().fg(theme::TITLE),
        ))
        .title_bottom(
            Line::from(format!(" {}/{} ", app.store.len(), app.store.capacity())).right_aligned(),
        );

    if app.store.is_empty() {
        let empty = Paragraph::new(constants::MSG_EMPTY_FLEET)
            .style(Style::default().fg(theme::TEXT_SECONDARY))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .list()
        .map(|(index, bike)| ListItem::new(row(index, bike)))
        .collect();
    let list = List::new(items).block(block);

    if app.list_focused {
        let list = list
            .highlight_style(
                Style::default()
                    .bg(theme::ROW_SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut app.list_state);
    } else {
        frame.render_widget(list, area);
    }
}

/// `N. type - location - status`, green when available, red when borrowed.
fn row(index: usize, bike: &BicycleRecord) -> Line<'static> {
    let color = if bike.available {
        theme::AVAILABLE
    } else {
        theme::BORROWED
    };
    Line::from(Span::styled(
        format!(
            "{index}. {} - {} - {}",
            bike.kind,
            bike.location,
            bike.status_label()
        ),
        Style::default().fg(color),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_empty_fleet() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(InventoryStore::new(dir.path().join("b.txt"), 100));
        let text = screen_text(&mut app);
        assert!(text.contains("Main Menu"));
        assert!(text.contains(constants::MSG_EMPTY_FLEET));
        assert!(text.contains("Borrow bicycle"));
    }

    #[test]
    fn test_renders_rows_with_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new(dir.path().join("b.txt"), 100);
        store.add("mountain", "depot-1").unwrap();
        store.add("city", "north").unwrap();
        store.borrow(2).unwrap();
        let mut app = App::new(store);

        let text = screen_text(&mut app);
        assert!(text.contains("1. mountain - depot-1 - Available"));
        assert!(text.contains("2. city - north - Borrowed"));
        assert!(text.contains("1 available"));
        assert!(text.contains("1 borrowed"));
    }

    #[test]
    fn test_row_colors() {
        let mut bike = BicycleRecord::new(crate::state::BicycleType::Flat, "x");
        assert_eq!(row(1, &bike).spans[0].style.fg, Some(theme::AVAILABLE));
        bike.available = false;
        assert_eq!(row(1, &bike).spans[0].style.fg, Some(theme::BORROWED));
    }
}
