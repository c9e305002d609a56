//! Tests for notification_render

use super::*;
use crate::notification::{NotificationOptions, NotificationQueue, NotificationTemplate};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(queue: &NotificationQueue, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let notifications = queue.get_all();
    terminal
        .draw(|f| render_notifications(f, &notifications))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_no_notifications_renders_blank() {
    let queue = NotificationQueue::new();
    let output = render_to_string(&queue, 80, 24);
    assert!(output.lines().all(|l| l.trim_matches('"').trim().is_empty()));
}

#[test]
fn test_toast_shows_title_and_message() {
    let queue = NotificationQueue::new();
    queue.success("Order placed", NotificationOptions::new());
    let output = render_to_string(&queue, 80, 24);
    assert!(output.contains("Success: Order placed"));
}

#[test]
fn test_toast_is_in_top_right_corner() {
    let queue = NotificationQueue::new();
    queue.info("Synced", NotificationOptions::new());
    let output = render_to_string(&queue, 80, 24);
    let lines: Vec<&str> = output.lines().collect();
    // Row 0 is the margin, row 2 holds the text
    assert!(!lines[0].contains("Synced"));
    assert!(lines[2].contains("Synced"));
    let col = lines[2].find("Synced").unwrap();
    assert!(col > 40, "toast should be right-aligned, found at {}", col);
}

#[test]
fn test_newest_toast_on_top_and_capped() {
    let queue = NotificationQueue::new();
    for i in 1..=5 {
        queue.info(&format!("message {}", i), NotificationOptions::new());
    }
    let output = render_to_string(&queue, 80, 24);
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[2].contains("message 5"));
    assert!(lines[5].contains("message 4"));
    assert!(lines[8].contains("message 3"));
    assert!(!output.contains("message 2"));
    assert!(!output.contains("message 1"));
}

#[test]
fn test_action_label_is_rendered() {
    let queue = NotificationQueue::new();
    queue.add(
        NotificationTemplate::MessageReceived {
            sender: "Acme".to_string(),
        }
        .into(),
    );
    let output = render_to_string(&queue, 100, 24);
    assert!(output.contains("[View]"));
}

#[test]
fn test_tiny_terminal_renders_nothing() {
    let queue = NotificationQueue::new();
    queue.error("Failed", NotificationOptions::new());
    let output = render_to_string(&queue, 10, 3);
    assert!(!output.contains("Failed"));
}
