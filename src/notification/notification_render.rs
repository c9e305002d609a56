//! Toast rendering
//!
//! Draws the newest notifications stacked in the top-right corner of the frame.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{Notification, NotificationKind};
use crate::theme;
use crate::theme::notification::NotificationColors;
use crate::widgets::popup;

pub const MAX_VISIBLE_TOASTS: usize = 3;
const TOAST_HEIGHT: u16 = 3;
const TOAST_MARGIN: u16 = 1;
const MIN_TOAST_WIDTH: u16 = 12;

fn colors(kind: NotificationKind) -> NotificationColors {
    match kind {
        NotificationKind::Success => theme::notification::SUCCESS,
        NotificationKind::Error => theme::notification::ERROR,
        NotificationKind::Warning => theme::notification::WARNING,
        NotificationKind::Info => theme::notification::INFO,
        NotificationKind::Loading => theme::notification::LOADING,
    }
}

fn toast_line(notification: &Notification) -> Line<'static> {
    let colors = colors(notification.kind);
    let base = Style::default().fg(colors.fg).bg(colors.bg);

    let mut spans = vec![
        Span::styled(
            format!(" {} {}: ", notification.kind.icon(), notification.title),
            base.add_modifier(Modifier::BOLD),
        ),
        Span::styled(notification.message.clone(), base),
    ];
    if let Some(action) = &notification.action {
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(
            format!("[{}]", action.label),
            base.patch(theme::notification::ACTION),
        ));
    }
    spans.push(Span::styled(" ", base));
    Line::from(spans)
}

/// Render up to `MAX_VISIBLE_TOASTS` notifications, newest on top
pub fn render_notifications(frame: &mut Frame, notifications: &[Notification]) {
    let frame_area = frame.area();

    for (slot, notification) in notifications.iter().take(MAX_VISIBLE_TOASTS).enumerate() {
        let line = toast_line(notification);
        let width = line.width() as u16 + 2;
        let area = popup::top_right(
            frame_area,
            width,
            TOAST_HEIGHT,
            TOAST_MARGIN,
            slot as u16 * TOAST_HEIGHT,
        );

        // Don't render if area is too small
        if area.width < MIN_TOAST_WIDTH || area.height < TOAST_HEIGHT {
            return;
        }

        let colors = colors(notification.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border).bg(colors.bg))
            .style(Style::default().bg(colors.bg));

        popup::clear_area(frame, area);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
