mod app_events;
mod app_render;
mod app_state;
mod debouncer;
mod jobs_loader;


// Re-export public types
pub use app_state::App;
pub use debouncer::Debouncer;
pub use jobs_loader::{JobsLoader, JobsResult, LoadFailure};
