//! Shared test utilities for srm
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

    use crate::suggestion::{Suggestion, SuggestionHandler, SuggestionType};

    /// Handler that records every callback as a string
    #[derive(Debug, Default)]
    pub struct RecordingHandler {
        pub calls: Vec<String>,
    }

    impl SuggestionHandler for RecordingHandler {
        fn on_select(&mut self, suggestion: &Suggestion) {
            self.calls.push(format!("select:{}", suggestion.id));
        }

        fn on_close(&mut self) {
            self.calls.push("close".to_string());
        }

        fn navigate(&mut self, route: &str) {
            self.calls.push(format!("navigate:{}", route));
        }
    }

    /// One suggestion of each known type
    pub fn sample_suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion::new("m1", SuggestionType::Material, "PVC Resin").with_category("Polymers"),
            Suggestion::new("x1", SuggestionType::Machine, "Engel Victory 200")
                .with_category("Injection moulding"),
            Suggestion::new("j1", SuggestionType::Job, "Cap run 2024"),
            Suggestion::new("d1", SuggestionType::Mould, "Bottle cap 8-cavity"),
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }
}
