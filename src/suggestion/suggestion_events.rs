//! Keyboard and pointer handling for the suggestion dropdown
//!
//! Events are only acted on while the dropdown is visible. Handled keys
//! return `true` so the host does not also feed them to the search input.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::suggestion_state::{SuggestionController, SuggestionHandler};

impl SuggestionController {
    /// Handle a key press. Returns whether the key was consumed.
    pub fn handle_key<H: SuggestionHandler>(&mut self, key: KeyEvent, handler: &mut H) -> bool {
        if !self.is_visible {
            return false;
        }

        match key.code {
            KeyCode::Down => {
                self.select_next();
                true
            }
            KeyCode::Up => {
                self.select_previous();
                true
            }
            KeyCode::Enter => {
                self.select_current(handler);
                true
            }
            KeyCode::Esc => {
                self.close(handler);
                true
            }
            _ => false,
        }
    }

    /// Close the dropdown when a pointer-down lands outside of it
    pub fn handle_outside_interaction<H: SuggestionHandler>(
        &mut self,
        target_is_outside: bool,
        handler: &mut H,
    ) {
        if self.is_visible && target_is_outside {
            self.close(handler);
        }
    }

    /// Handle a mouse event against the dropdown drawn at `widget_area`.
    ///
    /// Rows start one line below the top border and follow the scroll window. Moving over a row selects it,
    /// clicking a row chooses it, and a click outside the area closes the dropdown.
    /// Returns whether the event was consumed.
    pub fn handle_mouse<H: SuggestionHandler>(
        &mut self,
        mouse: MouseEvent,
        widget_area: Rect,
        handler: &mut H,
    ) -> bool {
        if !self.is_visible {
            return false;
        }

        let position = Position::new(mouse.column, mouse.row);
        let inside = widget_area.contains(position);
        let index = row_at(widget_area, position).and_then(|row| self.index_at_row(row));

        match mouse.kind {
            MouseEventKind::Down(_) if !inside => {
                self.handle_outside_interaction(true, handler);
                false
            }
            MouseEventKind::Down(_) => {
                if let Some(index) = index {
                    self.hover(index);
                    self.select_current(handler);
                }
                true
            }
            MouseEventKind::Moved if inside => {
                if let Some(index) = index {
                    self.hover(index);
                }
                true
            }
            _ => false,
        }
    }
}

fn row_at(area: Rect, position: Position) -> Option<usize> {
    let first_row = area.y + 1;
    let last_row = area.y + area.height.saturating_sub(1);
    if position.y >= first_row && position.y < last_row {
        Some((position.y - first_row) as usize)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "suggestion_events_tests.rs"]
mod suggestion_events_tests;
