//! UI rendering module

mod dashboard;
mod overlays;
mod widgets;

use crate::app::{App, Mode};
use ratatui::Frame;

/// Main render function - dispatches to appropriate view
pub fn render(frame: &mut Frame, app: &mut App) {
    // Base view
    dashboard::render(frame, app);

    match &app.mode {
        Mode::Menu => {}
        Mode::AddForm(form) => overlays::add_form::render(frame, form),
        Mode::IndexPrompt(prompt) => overlays::index_prompt::render(frame, prompt, &app.store),
    }

    // Render toast notification if present
    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AddForm, IndexAction, IndexPrompt};
    use crate::inventory::InventoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
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
    fn test_add_form_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(InventoryStore::new(dir.path().join("b.txt"), 10));
        app.mode = Mode::AddForm(AddForm {
            location: "depot-9".into(),
            ..AddForm::default()
        });
        let text = draw(&mut app);
        assert!(text.contains("Add Bicycle"));
        assert!(text.contains("city"));
        assert!(text.contains("depot-9"));
    }

    #[test]
    fn test_index_prompt_previews_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new(dir.path().join("b.txt"), 10);
        store.add("courier", "hub").unwrap();
        let mut app = App::new(store);
        app.mode = Mode::IndexPrompt(IndexPrompt {
            action: IndexAction::Borrow,
            input: "1".into(),
        });
        let text = draw(&mut app);
        assert!(text.contains("Borrow Bicycle"));
        assert!(text.contains("0 to go back"));
        // Once in the list, once in the preview line.
        assert_eq!(text.matches("courier - hub - Available").count(), 2);
    }
}
