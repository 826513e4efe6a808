//! Transient notifications
//!
//! Any component can show a message in the top-right overlay.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
