use std::io::stdout;

use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

use super::debouncer::Debouncer;
use super::jobs_loader::JobsLoader;
use crate::config::SearchConfig;
use crate::notification::{NotificationOptions, NotificationQueue};
use crate::suggestion::{
    InteractionScope, Suggestion, SuggestionCatalog, SuggestionController, SuggestionHandler,
};
use crate::theme;

const PLACEHOLDER: &str = "Search materials, machines, jobs, moulds";

pub struct App {
    pub input: TextArea<'static>,
    pub suggestions: SuggestionController,
    pub catalog: SuggestionCatalog,
    pub notifications: NotificationQueue,
    pub debouncer: Debouncer,
    pub should_quit: bool,
    max_suggestions: usize,
    jobs_loader: Option<JobsLoader>,
    loading_notification: Option<u64>,
    interaction_scope: Option<InteractionScope>,
    capture_mouse: bool,
    /// Where the dropdown was last drawn, for pointer hit-testing
    pub(super) suggestions_area: Option<Rect>,
    route: Option<String>,
}

/// Controller callbacks, borrowing only the fields they write
pub(super) struct SelectionSink<'a> {
    input: &'a mut TextArea<'static>,
    route: &'a mut Option<String>,
}

impl SuggestionHandler for SelectionSink<'_> {
    fn on_select(&mut self, suggestion: &Suggestion) {
        log::debug!(
            "Selected {} suggestion {}",
            suggestion.suggestion_type,
            suggestion.id
        );
        *self.input = search_input();
        self.input.insert_str(&suggestion.name);
    }

    fn on_close(&mut self) {
        log::debug!("Suggestions closed");
    }

    fn navigate(&mut self, route: &str) {
        log::info!("Navigating to {}", route);
        *self.route = Some(route.to_string());
    }
}

fn search_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea.set_cursor_style(theme::input::CURSOR);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

fn set_mouse_capture(enabled: bool) {
    let result = if enabled {
        execute!(stdout(), EnableMouseCapture)
    } else {
        execute!(stdout(), DisableMouseCapture)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle mouse capture: {}", e);
    }
}

impl App {
    pub fn new(
        catalog: SuggestionCatalog,
        notifications: NotificationQueue,
        config: &SearchConfig,
    ) -> Self {
        Self {
            input: search_input(),
            suggestions: SuggestionController::new(),
            catalog,
            notifications,
            debouncer: Debouncer::new(config.debounce_ms),
            should_quit: false,
            max_suggestions: config.max_suggestions,
            jobs_loader: None,
            loading_notification: None,
            interaction_scope: None,
            capture_mouse: false,
            suggestions_area: None,
            route: None,
        }
    }

    /// Fetch jobs in the background and merge them into the catalog when they arrive
    pub fn with_jobs_loader(mut self, loader: JobsLoader) -> Self {
        let id = self
            .notifications
            .loading("Fetching jobs", NotificationOptions::new().title("Jobs"));
        self.loading_notification = Some(id);
        self.suggestions.set_loading(true);
        self.jobs_loader = Some(loader);
        self
    }

    /// Capture the mouse while the dropdown is open (real terminals only)
    pub fn enable_mouse_capture(&mut self) {
        self.capture_mouse = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route chosen by the user, if any
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn query(&self) -> &str {
        self.input.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn has_interaction_scope(&self) -> bool {
        self.interaction_scope.is_some()
    }

    pub fn jobs_pending(&self) -> bool {
        self.jobs_loader.is_some()
    }

    pub(super) fn split(&mut self) -> (&mut SuggestionController, SelectionSink<'_>) {
        (
            &mut self.suggestions,
            SelectionSink {
                input: &mut self.input,
                route: &mut self.route,
            },
        )
    }

    /// Re-run the catalog search for the current input
    pub fn refresh_suggestions(&mut self) {
        self.debouncer.mark_executed();

        let term = self.query().trim().to_string();
        let results = self.catalog.search(&term, self.max_suggestions);
        log::debug!("{} suggestions for {:?}", results.len(), term);

        self.suggestions.set_suggestions(results);
        if term.is_empty() {
            self.suggestions.hide();
        } else {
            self.suggestions.show();
        }
        self.suggestions.set_term(term);
        self.sync_interaction_scope();
    }

    /// Apply the background job fetch once it has finished
    pub fn poll_jobs_loader(&mut self) {
        let Some(result) = self.jobs_loader.as_ref().and_then(JobsLoader::poll) else {
            return;
        };
        self.jobs_loader = None;

        if let Some(id) = self.loading_notification.take() {
            self.notifications.remove(id);
        }
        self.suggestions.set_loading(false);

        match result {
            Ok(jobs) => {
                log::info!("Loaded {} jobs into the catalog", jobs.len());
                self.catalog.extend_with_jobs(&jobs);
                self.notifications.success(
                    &format!("{} jobs available to search", jobs.len()),
                    NotificationOptions::new().title("Jobs synced"),
                );
            }
            Err(failure) => {
                self.notifications.add(failure.template().fields());
            }
        }

        if self.suggestions.is_visible() {
            self.refresh_suggestions();
        }
    }

    /// Hold the interaction scope exactly while the dropdown is visible
    pub fn sync_interaction_scope(&mut self) {
        let visible = self.suggestions.is_visible();
        if visible && self.interaction_scope.is_none() {
            let scope = if self.capture_mouse {
                InteractionScope::acquire(|| set_mouse_capture(true), || set_mouse_capture(false))
            } else {
                InteractionScope::acquire(|| {}, || {})
            };
            self.interaction_scope = Some(scope);
        } else if !visible && let Some(scope) = self.interaction_scope.take() {
            scope.release();
        }
    }

    /// Drop anything attached to the terminal before it is restored
    pub fn release_interaction(&mut self) {
        if let Some(scope) = self.interaction_scope.take() {
            scope.release();
        }
    }
}
