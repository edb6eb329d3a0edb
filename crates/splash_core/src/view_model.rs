use crate::ChannelState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplashViewModel {
    pub channel: ChannelState,
    pub status: String,
    pub title: String,
    pub progress: u64,
    pub progress_max: f64,
    pub close_pending: bool,
    pub dirty: bool,
}

impl SplashViewModel {
    /// Bar width as currently derivable from the counters.
    pub fn progress_width(&self) -> String {
        progress_width(self.progress, self.progress_max)
    }
}

/// Unclamped percentage of `progress` against `progress_max`, formatted as
/// a CSS-style width string. Exceeds "100%" when progress overshoots the
/// maximum; non-finite ("inf%") when no maximum was announced.
pub fn progress_width(progress: u64, progress_max: f64) -> String {
    let percent = (progress as f64 / progress_max) * 100.0;
    format!("{percent}%")
}
