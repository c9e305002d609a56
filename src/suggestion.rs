//! Search suggestion dropdown
//!
//! The caller supplies the suggestion list for each keystroke. This module owns
//! the selection state, keyboard and pointer handling, highlighting, the route
//! a selection navigates to, and rendering.

pub mod catalog;
mod highlight;
mod route;
mod scope;
mod suggestion_events;
mod suggestion_render;
mod suggestion_state;

pub use catalog::SuggestionCatalog;
pub use highlight::{Segment, highlight_match};
pub use route::{encode_component, route_for};
pub use scope::InteractionScope;
pub use suggestion_render::render_suggestions;
pub use suggestion_state::{
    MAX_VISIBLE_SUGGESTIONS, RenderState, Suggestion, SuggestionController, SuggestionHandler, SuggestionType,
    render_state,
};
