use std::fmt;

use serde::{Deserialize, Serialize};

use super::route::route_for;

/// Domain type of a search suggestion. Unknown type strings deserialize to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Material,
    Machine,
    Job,
    Mould,
    #[default]
    #[serde(other)]
    Other,
}

impl SuggestionType {
    /// Human readable label shown at the end of each row
    pub fn label(self) -> &'static str {
        match self {
            SuggestionType::Material => "Material",
            SuggestionType::Machine => "Machine",
            SuggestionType::Job => "Job",
            SuggestionType::Mould => "Mould",
            SuggestionType::Other => "Search",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SuggestionType::Material => "◆",
            SuggestionType::Machine => "⚙",
            SuggestionType::Job => "▣",
            SuggestionType::Mould => "◎",
            SuggestionType::Other => "⌕",
        }
    }

    /// Route prefix that lists entities of this type
    pub fn route(self) -> &'static str {
        match self {
            SuggestionType::Material => "/materials",
            SuggestionType::Machine => "/machinery",
            SuggestionType::Job => "/jobs",
            SuggestionType::Mould => "/moulds",
            SuggestionType::Other => "/materials",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionType::Material => write!(f, "material"),
            SuggestionType::Machine => write!(f, "machine"),
            SuggestionType::Job => write!(f, "job"),
            SuggestionType::Mould => write!(f, "mould"),
            SuggestionType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type", default)]
    pub suggestion_type: SuggestionType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        suggestion_type: SuggestionType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            suggestion_type,
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Callbacks the host supplies to the controller.
///
/// `on_select` runs first, then `on_close`, then `navigate` with the route
/// for the selected suggestion.
pub trait SuggestionHandler {
    fn on_select(&mut self, suggestion: &Suggestion);
    fn on_close(&mut self);
    fn navigate(&mut self, route: &str);
}

/// What the suggestion dropdown should display, chosen before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Hidden,
    Loading,
    List,
    NoResults,
}

/// Rows the dropdown shows at most; longer lists scroll
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

/// Interaction state for the search suggestion dropdown.
///
/// `selected_index` is `None` when nothing is selected and otherwise always
/// indexes into `suggestions`. The selected row is kept inside the window
/// `scroll_offset..scroll_offset + visible_count`.
#[derive(Debug, Clone)]
pub struct SuggestionController {
    pub(super) suggestions: Vec<Suggestion>,
    pub(super) selected_index: Option<usize>,
    pub(super) is_visible: bool,
    is_loading: bool,
    term: String,
    scroll_offset: usize,
    visible_count: usize,
}

impl Default for SuggestionController {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: None,
            is_visible: false,
            is_loading: false,
            term: String::new(),
            scroll_offset: 0,
            visible_count: MAX_VISIBLE_SUGGESTIONS,
        }
    }
}

impl SuggestionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suggestion list. Selection and scrolling always reset.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected_index = None;
        self.scroll_offset = 0;
    }

    /// Number of rows the renderer could fit; re-clamps the window
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count.max(1);
        self.adjust_scroll_to_selection();
    }

    fn adjust_scroll_to_selection(&mut self) {
        let selected = self.selected_index.unwrap_or(0);
        if selected >= self.scroll_offset + self.visible_count {
            self.scroll_offset = selected + 1 - self.visible_count;
        } else if selected < self.scroll_offset {
            self.scroll_offset = selected;
        }

        let max_offset = self.suggestions.len().saturating_sub(self.visible_count);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Suggestions inside the scroll window, with their list index
    pub fn visible_suggestions(&self) -> impl Iterator<Item = (usize, &Suggestion)> {
        self.suggestions
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.visible_count)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// List index of the suggestion drawn on window row `row`
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        let index = self.scroll_offset + row;
        (row < self.visible_count && index < self.suggestions.len()).then_some(index)
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn show(&mut self) {
        self.is_visible = true;
    }

    /// Hide without notifying the host
    pub fn hide(&mut self) {
        self.is_visible = false;
    }

    /// Hide and tell the host the dropdown closed
    pub fn close<H: SuggestionHandler>(&mut self, handler: &mut H) {
        self.is_visible = false;
        handler.on_close();
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected_index = Some(match self.selected_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
        self.adjust_scroll_to_selection();
    }

    pub fn select_previous(&mut self) {
        self.selected_index = match self.selected_index {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.adjust_scroll_to_selection();
    }

    /// Move the selection to a hovered row; out-of-range rows are ignored
    pub fn hover(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.selected_index = Some(index);
            self.adjust_scroll_to_selection();
        }
    }

    /// Run the selection sequence for `suggestion`
    pub fn select<H: SuggestionHandler>(&mut self, suggestion: &Suggestion, handler: &mut H) {
        handler.on_select(suggestion);
        self.close(handler);
        handler.navigate(&route_for(suggestion));
    }

    /// Select the currently highlighted suggestion, if any. Returns whether a selection happened.
    pub fn select_current<H: SuggestionHandler>(&mut self, handler: &mut H) -> bool {
        match self.selected().cloned() {
            Some(suggestion) => {
                self.select(&suggestion, handler);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn render_state(&self) -> RenderState {
        render_state(self.is_visible, self.is_loading, &self.suggestions, &self.term)
    }
}

/// Pick the display state. Loading wins over results, results over the empty state.
pub fn render_state(
    is_visible: bool,
    is_loading: bool,
    suggestions: &[Suggestion],
    term: &str,
) -> RenderState {
    if !is_visible {
        RenderState::Hidden
    } else if is_loading {
        RenderState::Loading
    } else if !suggestions.is_empty() {
        RenderState::List
    } else if !term.is_empty() {
        RenderState::NoResults
    } else {
        RenderState::Hidden
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
