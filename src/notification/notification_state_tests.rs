//! Tests for notification_state

use super::*;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_info_notification_is_short_lived() {
    let notif = Notification::with_type("Copied quote!", NotificationType::Info);
    assert_eq!(notif.duration, Some(Duration::from_millis(1500)));
    assert_eq!(notif.style.bg, theme::notification::INFO.bg);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification_lasts_ten_seconds() {
    let mut state = NotificationState::new();
    state.show_warning("No quotes available");

    let notif = state.current().unwrap();
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.duration, Some(Duration::from_secs(10)));
    assert_eq!(notif.style.fg, theme::notification::WARNING.fg);
}

#[test]
fn test_error_notification_never_expires() {
    let mut state = NotificationState::new();
    state.show_error("Clipboard write failed");

    assert_eq!(state.current_type(), Some(NotificationType::Error));
    assert!(!state.clear_if_expired());
    assert_eq!(state.current_message(), Some("Clipboard write failed"));
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    state.show("Copied 3 quotes!");

    if let Some(ref mut notif) = state.current {
        notif.duration = Some(Duration::from_millis(10));
    }

    assert!(!state.clear_if_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
}

#[test]
fn test_dismiss() {
    let mut state = NotificationState::new();
    assert!(!state.dismiss());

    state.show_error("boom");
    assert!(state.dismiss());
    assert!(state.current().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Only the most recent notification is visible
    #[test]
    fn prop_notification_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
        let mut state = NotificationState::new();

        for msg in &messages {
            state.show(msg);
        }

        let last_message = messages.last().unwrap();
        prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
    }
}
