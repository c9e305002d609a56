//! Pre-filled notifications for common application events
//!
//! Each template builds its own `NotificationFields` from its arguments.
//! Attached actions carry an intent string such as `navigate:/messages`;
//! interpreting it is up to the host.

use super::notification_state::{NotificationAction, NotificationFields, NotificationKind};

/// Semantic events that have a notification template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTemplate {
    MessageReceived { sender: String },
    QuoteReceived { supplier: String, item: String },
    QuoteRequested { item: String },
    FavoriteAdded { item: String },
    FavoriteRemoved { item: String },
    CartItemAdded { item: String },
    NetworkError,
    ServerError,
    FormSubmitted,
    FormError { message: String },
    SearchCompleted { count: usize },
    SearchNoResults { term: String },
}

impl NotificationTemplate {
    /// Stable snake_case identifier for this event
    pub fn name(&self) -> &'static str {
        match self {
            NotificationTemplate::MessageReceived { .. } => "message_received",
            NotificationTemplate::QuoteReceived { .. } => "quote_received",
            NotificationTemplate::QuoteRequested { .. } => "quote_requested",
            NotificationTemplate::FavoriteAdded { .. } => "favorite_added",
            NotificationTemplate::FavoriteRemoved { .. } => "favorite_removed",
            NotificationTemplate::CartItemAdded { .. } => "cart_item_added",
            NotificationTemplate::NetworkError => "network_error",
            NotificationTemplate::ServerError => "server_error",
            NotificationTemplate::FormSubmitted => "form_submitted",
            NotificationTemplate::FormError { .. } => "form_error",
            NotificationTemplate::SearchCompleted { .. } => "search_completed",
            NotificationTemplate::SearchNoResults { .. } => "search_no_results",
        }
    }

    pub fn fields(&self) -> NotificationFields {
        match self {
            NotificationTemplate::MessageReceived { sender } => {
                NotificationFields::new(NotificationKind::Info, format!("{} sent you a message", sender))
                    .with_title("New message")
                    .with_action(NotificationAction::new("View", "navigate:/messages"))
            }
            NotificationTemplate::QuoteReceived { supplier, item } => NotificationFields::new(
                NotificationKind::Success,
                format!("{} quoted for {}", supplier, item),
            )
            .with_title("Quote received")
            .with_duration(Some(8000))
            .with_action(NotificationAction::new("Review", "navigate:/quotes")),
            NotificationTemplate::QuoteRequested { item } => NotificationFields::new(
                NotificationKind::Success,
                format!("Quote request sent for {}", item),
            )
            .with_title("Quote requested"),
            NotificationTemplate::FavoriteAdded { item } => NotificationFields::new(
                NotificationKind::Success,
                format!("{} added to favorites", item),
            )
            .with_title("Saved")
            .with_duration(Some(3000)),
            NotificationTemplate::FavoriteRemoved { item } => NotificationFields::new(
                NotificationKind::Info,
                format!("{} removed from favorites", item),
            )
            .with_title("Removed")
            .with_duration(Some(3000)),
            NotificationTemplate::CartItemAdded { item } => {
                NotificationFields::new(NotificationKind::Success, format!("{} added to cart", item))
                    .with_title("Added to cart")
                    .with_action(NotificationAction::new("View cart", "navigate:/cart"))
            }
            NotificationTemplate::NetworkError => NotificationFields::new(
                NotificationKind::Error,
                "Unable to reach the server. Check your connection and try again.",
            )
            .with_title("Network error")
            .with_action(NotificationAction::new("Retry", "retry")),
            NotificationTemplate::ServerError => NotificationFields::new(
                NotificationKind::Error,
                "Something went wrong on our side. Please try again later.",
            )
            .with_title("Server error"),
            NotificationTemplate::FormSubmitted => NotificationFields::new(
                NotificationKind::Success,
                "Your changes have been saved",
            )
            .with_title("Submitted"),
            NotificationTemplate::FormError { message } => {
                NotificationFields::new(NotificationKind::Error, message.clone())
                    .with_title("Please check the form")
            }
            NotificationTemplate::SearchCompleted { count } => {
                let noun = if *count == 1 { "result" } else { "results" };
                NotificationFields::new(NotificationKind::Info, format!("Found {} {}", count, noun))
                    .with_title("Search complete")
                    .with_duration(Some(3000))
            }
            NotificationTemplate::SearchNoResults { term } => NotificationFields::new(
                NotificationKind::Warning,
                format!("Nothing matched \"{}\"", term),
            )
            .with_title("No results")
            .with_duration(Some(4000)),
        }
    }
}

impl From<NotificationTemplate> for NotificationFields {
    fn from(template: NotificationTemplate) -> Self {
        template.fields()
    }
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod templates_tests;
