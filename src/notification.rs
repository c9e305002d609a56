//! Notification module for srm
//!
//! Provides the shared toast queue, event templates, and the toast renderer.
//! Any component in the application can raise notifications through a cloned
//! `NotificationQueue` handle.

mod notification_queue;
mod notification_render;
mod notification_state;
mod templates;

pub use notification_queue::{NotificationQueue, Subscription};
pub use notification_render::{MAX_VISIBLE_TOASTS, render_notifications};
pub use notification_state::{
    Notification, NotificationAction, NotificationFields, NotificationKind, NotificationOptions,
    NotificationPatch,
};
pub use templates::NotificationTemplate;
