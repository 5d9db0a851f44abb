//! Interactive menu loop.

use color_eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::app::App;
use crate::event::{Event, EventHandler};
use crate::ui;

/// Take over the terminal and run the menu until the operator exits.
///
/// The terminal is restored even when drawing or event handling fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn or the event thread dies.
pub fn run(app: &mut App, tick_rate_ms: u64) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app, tick_rate_ms);
    ratatui::restore();
    info!("menu closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tick_rate_ms: u64) -> Result<()> {
    let events = EventHandler::new(tick_rate_ms);
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;
        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => app.on_tick(),
            Event::Resize => {}
        }
    }
    Ok(())
}
