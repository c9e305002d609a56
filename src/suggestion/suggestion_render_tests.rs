//! Tests for suggestion_render

use super::*;
use crate::test_utils::test_helpers::sample_suggestions;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const ANCHOR: Rect = Rect {
    x: 0,
    y: 0,
    width: 60,
    height: 3,
};

fn render_to_string(controller: &mut SuggestionController) -> (String, Option<Rect>) {
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    let mut drawn = None;
    terminal
        .draw(|f| drawn = render_suggestions(f, controller, ANCHOR))
        .unwrap();
    (terminal.backend().to_string(), drawn)
}

fn controller_with(term: &str) -> SuggestionController {
    let mut controller = SuggestionController::new();
    controller.set_suggestions(sample_suggestions());
    controller.set_term(term);
    controller.show();
    controller
}

#[test]
fn test_hidden_renders_nothing() {
    let mut controller = controller_with("pvc");
    controller.hide();
    let (output, drawn) = render_to_string(&mut controller);
    assert!(drawn.is_none());
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_loading_state() {
    let mut controller = controller_with("pvc");
    controller.set_loading(true);
    let (output, drawn) = render_to_string(&mut controller);
    assert!(output.contains("Searching"));
    assert!(!output.contains("PVC Resin"));
    assert_eq!(drawn.map(|a| a.y), Some(3));
}

#[test]
fn test_list_shows_names_categories_and_labels() {
    let (output, drawn) = render_to_string(&mut controller_with("pvc"));
    assert!(output.contains("PVC Resin · Polymers"));
    assert!(output.contains("Engel Victory 200"));
    assert!(output.contains("Material"));
    assert!(output.contains("Machine"));
    assert!(output.contains("Mould"));
    assert_eq!(drawn.map(|a| a.height), Some(6));
}

#[test]
fn test_selected_row_has_marker() {
    let mut controller = controller_with("");
    controller.select_next();
    let (output, _) = render_to_string(&mut controller);
    let marked: Vec<&str> = output.lines().filter(|l| l.contains('▌')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("PVC Resin"));
}

#[test]
fn test_matched_text_is_styled() {
    let mut controller = controller_with("resin");
    let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    terminal
        .draw(|f| {
            render_suggestions(f, &mut controller, ANCHOR);
        })
        .unwrap();

    // Row 4 is the first suggestion; find the "R" of "Resin"
    let buffer = terminal.backend().buffer();
    let row: String = (0..60).map(|x| buffer[(x, 4)].symbol().to_string()).collect();
    let col = row.find("Resin").expect("name rendered") as u16;
    let col = row[..col as usize].chars().count() as u16;
    assert_eq!(buffer[(col, 4)].fg, theme::palette::PRIMARY_LIGHT);
    assert!(buffer[(col, 4)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_no_results_state() {
    let mut controller = controller_with("zzz");
    controller.set_suggestions(Vec::new());
    let (output, _) = render_to_string(&mut controller);
    assert!(output.contains("No results for \"zzz\""));
}

#[test]
fn test_empty_term_and_empty_list_renders_nothing() {
    let mut controller = controller_with("");
    controller.set_suggestions(Vec::new());
    let (_, drawn) = render_to_string(&mut controller);
    assert!(drawn.is_none());
}

#[test]
fn test_list_is_capped() {
    let mut controller = SuggestionController::new();
    let many: Vec<_> = (0..25)
        .map(|i| {
            crate::suggestion::Suggestion::new(
                i.to_string(),
                SuggestionType::Material,
                format!("Grade {}", i),
            )
        })
        .collect();
    controller.set_suggestions(many);
    controller.show();
    let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
    let mut drawn = None;
    terminal
        .draw(|f| drawn = render_suggestions(f, &mut controller, ANCHOR))
        .unwrap();
    assert_eq!(
        drawn.map(|a| a.height),
        Some(MAX_VISIBLE_SUGGESTIONS as u16 + 2)
    );
}

fn grades(n: usize) -> Vec<crate::suggestion::Suggestion> {
    (0..n)
        .map(|i| {
            crate::suggestion::Suggestion::new(
                i.to_string(),
                SuggestionType::Material,
                format!("Grade {}", i),
            )
        })
        .collect()
}

#[test]
fn test_selection_past_last_row_scrolls_window() {
    let mut controller = SuggestionController::new();
    controller.set_suggestions(grades(15));
    controller.show();
    for _ in 0..12 {
        controller.select_next();
    }

    let (output, _) = render_to_string(&mut controller);

    let marked: Vec<&str> = output.lines().filter(|l| l.contains('▌')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Grade 11"), "{}", output);
    assert!(!output.contains("Grade 1 "));
    assert_eq!(controller.scroll_offset(), 2);
}

#[test]
fn test_short_terminal_keeps_selection_on_screen() {
    let mut controller = SuggestionController::new();
    controller.set_suggestions(grades(8));
    controller.show();
    for _ in 0..7 {
        controller.select_next();
    }

    // Six rows below the anchor leave room for four suggestions
    let mut terminal = Terminal::new(TestBackend::new(60, 9)).unwrap();
    let mut drawn = None;
    terminal
        .draw(|f| drawn = render_suggestions(f, &mut controller, ANCHOR))
        .unwrap();
    let output = terminal.backend().to_string();

    assert_eq!(drawn.map(|a| a.height), Some(6));
    assert_eq!(controller.scroll_offset(), 3);
    let marked: Vec<&str> = output.lines().filter(|l| l.contains('▌')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Grade 6"), "{}", output);
}
