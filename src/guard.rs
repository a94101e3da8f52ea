//! Inspection guard heuristics.
//!
//! Best-effort client-side checks with no security value: any user can
//! disable them. The window-delta test in particular misfires with zoom,
//! docked sidebars and browser differences, so the threshold is a guess.

use crate::config::{
    BLOCKED_KEY_CODE, DEVTOOLS_POLL_INTERVAL_MS, DEVTOOLS_WARNING, DEVTOOLS_WIDTH_THRESHOLD,
};
use std::time::Duration;

/// Window size sample taken by the poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSample {
    pub outer_width: i32,
    pub inner_width: i32,
}

/// What the guard does in response to a host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardAction {
    /// Let the event through.
    Allow,
    /// Cancel the event's default action.
    Suppress,
    /// Replace the page body with a warning.
    ReplaceBody(&'static str),
}

/// The context menu is always suppressed.
pub fn on_context_menu() -> GuardAction {
    GuardAction::Suppress
}

/// Swallow the blocked key, let every other key through.
pub fn on_key_down(key_code: u32) -> GuardAction {
    if key_code == BLOCKED_KEY_CODE {
        GuardAction::Suppress
    } else {
        GuardAction::Allow
    }
}

/// True when the outer/inner width delta suggests docked developer tools.
pub fn devtools_suspected(sample: WindowSample) -> bool {
    sample.outer_width.saturating_sub(sample.inner_width) > DEVTOOLS_WIDTH_THRESHOLD
}

/// Decision for one poll tick.
pub fn on_poll(sample: WindowSample) -> GuardAction {
    if devtools_suspected(sample) {
        GuardAction::ReplaceBody(DEVTOOLS_WARNING)
    } else {
        GuardAction::Allow
    }
}

/// How often the window is sampled.
pub fn poll_interval() -> Duration {
    Duration::from_millis(DEVTOOLS_POLL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(outer: i32, inner: i32) -> WindowSample {
        WindowSample {
            outer_width: outer,
            inner_width: inner,
        }
    }

    #[test]
    fn test_context_menu_suppressed() {
        assert_eq!(on_context_menu(), GuardAction::Suppress);
    }

    #[test]
    fn test_f12_swallowed() {
        assert_eq!(on_key_down(123), GuardAction::Suppress);
        assert_eq!(on_key_down(122), GuardAction::Allow);
    }

    #[test]
    fn test_devtools_threshold() {
        assert!(!devtools_suspected(sample(1280, 1280)));
        assert!(!devtools_suspected(sample(1430, 1280)));
        assert!(devtools_suspected(sample(1431, 1280)));
        assert_eq!(
            on_poll(sample(1600, 1000)),
            GuardAction::ReplaceBody("⚠ Developer Tools Detected")
        );
    }

    #[test]
    fn test_extreme_widths_do_not_overflow() {
        assert!(devtools_suspected(sample(i32::MAX, i32::MIN)));
        assert!(!devtools_suspected(sample(i32::MIN, i32::MAX)));
        assert_eq!(on_poll(sample(i32::MIN, 1)), GuardAction::Allow);
    }

    #[test]
    fn test_poll_interval() {
        assert_eq!(poll_interval(), Duration::from_secs(1));
    }
}
