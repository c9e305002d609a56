use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notifications;
use crate::suggestion::render_suggestions;
use crate::theme;

const HELP_ENTRIES: [(&str, &str); 4] = [
    ("↑↓", "select"),
    ("Enter", "open"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, body_area, help_area) = (layout[0], layout[1], layout[2]);

        self.render_input(frame, input_area);
        self.render_body(frame, body_area);
        render_help_line(frame, help_area);

        self.suggestions_area = render_suggestions(frame, &mut self.suggestions, input_area);
        render_notifications(frame, &self.notifications.get_all());
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.suggestions.is_loading() {
            theme::input::BORDER_LOADING
        } else {
            theme::input::BORDER
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(&self.input, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(theme::palette::TEXT_DIM);
        let mut lines = vec![Line::from(Span::styled(
            format!("{} catalog entries", self.catalog.len()),
            dim,
        ))];
        if self.jobs_pending() {
            lines.push(Line::from(Span::styled("Fetching jobs…", dim)));
        }
        let unread = self.notifications.unread_count();
        if unread > 0 {
            lines.push(Line::from(Span::styled(
                format!("{} unread notifications", unread),
                dim,
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let description_style = Style::default().fg(theme::help_line::DESCRIPTION);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in HELP_ENTRIES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", description_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", description), description_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
