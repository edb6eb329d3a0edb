use std::time::Duration;

/// How long the window stays up after a close trigger.
pub const CLOSE_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the status line region.
    ShowStatus(String),
    /// Write the window title region.
    ShowTitle(String),
    /// Write the progress bar width, a CSS-style percentage string.
    SetProgressWidth(String),
    /// Start the deferred window close.
    ScheduleClose,
}
