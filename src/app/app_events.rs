use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;

/// Timeout for event polling - allows periodic refresh for debounce and toast expiry
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        // Poll with timeout so expired toasts disappear without input
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Time-driven work: debounced search, background jobs, toast expiry
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.should_execute_at(now) {
            self.refresh_suggestions();
        }
        self.poll_jobs_loader();
        self.notifications.sweep_expired(now);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The open dropdown gets first refusal on navigation keys
        let (controller, mut sink) = self.split();
        if controller.handle_key(key, &mut sink) {
            self.after_interaction();
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                // Reopen the dropdown for the current term
                if !self.query().trim().is_empty() {
                    self.refresh_suggestions();
                }
            }
            // Single-line input
            KeyCode::Tab | KeyCode::BackTab => {}
            _ => {
                if self.input.input(key) {
                    self.debouncer.schedule_execution();
                }
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(area) = self.suggestions_area else {
            return;
        };
        let (controller, mut sink) = self.split();
        controller.handle_mouse(mouse, area, &mut sink);
        self.after_interaction();
    }

    /// Insert pasted text as a single line and refresh without waiting for the debounce
    fn handle_paste_event(&mut self, text: &str) {
        let line = text.replace(['\r', '\n'], " ");
        self.input.insert_str(line);
        self.refresh_suggestions();
    }

    fn after_interaction(&mut self) {
        if self.route().is_some() {
            self.should_quit = true;
        }
        if !self.suggestions.is_visible() {
            self.suggestions_area = None;
        }
        self.sync_interaction_scope();
    }
}
