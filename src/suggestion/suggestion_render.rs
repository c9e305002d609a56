use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::highlight::{Segment, highlight_match};
use super::suggestion_state::{
    MAX_VISIBLE_SUGGESTIONS, RenderState, SuggestionController, SuggestionType,
};
use crate::theme;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const MESSAGE_POPUP_HEIGHT: u16 = 3;
const LABEL_SPACING: usize = 2;

fn type_color(suggestion_type: SuggestionType) -> Color {
    match suggestion_type {
        SuggestionType::Material => theme::suggestions::MATERIAL,
        SuggestionType::Machine => theme::suggestions::MACHINE,
        SuggestionType::Job => theme::suggestions::JOB,
        SuggestionType::Mould => theme::suggestions::MOULD,
        SuggestionType::Other => theme::suggestions::OTHER,
    }
}

/// Render the suggestion dropdown under `anchor` (the search input).
///
/// Returns the area drawn so the caller can hit-test pointer events,
/// or `None` when nothing was rendered. The controller's scroll window is
/// fitted to the rows that are actually drawn.
pub fn render_suggestions(
    frame: &mut Frame,
    controller: &mut SuggestionController,
    anchor: Rect,
) -> Option<Rect> {
    let frame_area = frame.area();
    match controller.render_state() {
        RenderState::Hidden => None,
        RenderState::Loading => {
            let area = popup::popup_below_anchor(anchor, frame_area, MESSAGE_POPUP_HEIGHT);
            render_message(
                frame,
                area,
                "Searching…",
                Style::default().fg(theme::suggestions::LOADING),
            );
            Some(area)
        }
        RenderState::NoResults => {
            let area = popup::popup_below_anchor(anchor, frame_area, MESSAGE_POPUP_HEIGHT);
            let text = format!("No results for \"{}\"", controller.term());
            render_message(
                frame,
                area,
                &text,
                Style::default()
                    .fg(theme::suggestions::EMPTY)
                    .add_modifier(Modifier::ITALIC),
            );
            Some(area)
        }
        RenderState::List => Some(render_list(frame, controller, anchor, frame_area)),
    }
}

fn suggestions_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(theme::suggestions::BORDER))
        .style(Style::default().bg(theme::suggestions::BACKGROUND))
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", text), style)))
        .block(suggestions_block());
    frame.render_widget(paragraph, area);
}

fn render_list(
    frame: &mut Frame,
    controller: &mut SuggestionController,
    anchor: Rect,
    frame_area: Rect,
) -> Rect {
    let wanted_rows = controller.suggestions().len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = wanted_rows as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(anchor, frame_area, popup_height);
    controller.set_visible_count(area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize);
    let controller = &*controller;

    let max_name_width = controller
        .visible_suggestions()
        .map(|(_, s)| display_width(s.name.as_str(), s.category.as_deref()))
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = controller
        .visible_suggestions()
        .map(|(i, suggestion)| {
            let is_selected = controller.selected_index() == Some(i);
            let (fg, bg) = if is_selected {
                (
                    theme::suggestions::SELECTED_FG,
                    theme::suggestions::SELECTED_BG,
                )
            } else {
                (theme::suggestions::TEXT, theme::suggestions::BACKGROUND)
            };
            let base = Style::default().fg(fg).bg(bg);

            let mut spans = Vec::new();
            spans.push(if is_selected {
                Span::styled(
                    "▌",
                    Style::default()
                        .fg(theme::suggestions::SELECTED_MARKER)
                        .bg(bg),
                )
            } else {
                Span::styled(" ", base)
            });
            spans.push(Span::styled(
                format!("{} ", suggestion.suggestion_type.icon()),
                Style::default()
                    .fg(type_color(suggestion.suggestion_type))
                    .bg(bg),
            ));

            for segment in highlight_match(&suggestion.name, controller.term()) {
                match segment {
                    Segment::Plain(text) => spans.push(Span::styled(text.to_string(), base)),
                    Segment::Match(text) => spans.push(Span::styled(
                        text.to_string(),
                        theme::suggestions::MATCH.bg(bg),
                    )),
                }
            }

            if let Some(category) = &suggestion.category {
                spans.push(Span::styled(
                    format!(" · {}", category),
                    Style::default().fg(theme::suggestions::CATEGORY).bg(bg),
                ));
            }

            let used = display_width(&suggestion.name, suggestion.category.as_deref());
            let padding = max_name_width.saturating_sub(used) + LABEL_SPACING;
            spans.push(Span::styled(" ".repeat(padding), base));
            spans.push(Span::styled(
                format!("{} ", suggestion.suggestion_type.label()),
                Style::default().fg(theme::suggestions::LABEL).bg(bg),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    popup::clear_area(frame, area);
    frame.render_widget(List::new(items).block(suggestions_block()), area);
    area
}

fn display_width(name: &str, category: Option<&str>) -> usize {
    let category_width = category.map_or(0, |c| c.chars().count() + 3);
    name.chars().count() + category_width
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
