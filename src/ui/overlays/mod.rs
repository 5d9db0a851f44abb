//! Popups drawn over the dashboard.

pub mod add_form;
pub mod index_prompt;
pub mod toast;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
