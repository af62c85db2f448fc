pub mod header;
pub mod help;
pub mod history_view;
pub mod mood_view;
pub mod status_bar;
pub mod welcome;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::events::AppEvent;

/// Trait for all UI components
pub trait Component {
    /// Handle a key event, optionally returning an AppEvent
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent>;

    /// Render the component into the given area
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
