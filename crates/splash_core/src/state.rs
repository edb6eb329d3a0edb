use crate::view_model::SplashViewModel;

/// Lifecycle of the status channel. Terminal once closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    /// Handshake not finished yet.
    #[default]
    Connecting,
    /// Live status channel.
    Open,
    /// Transport gone; no further messages are applied.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientState {
    channel: ChannelState,
    status: String,
    title: String,
    progress: u64,
    progress_max: f64,
    close_pending: bool,
    dirty: bool,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SplashViewModel {
        SplashViewModel {
            channel: self.channel,
            status: self.status.clone(),
            title: self.title.clone(),
            progress: self.progress,
            progress_max: self.progress_max,
            close_pending: self.close_pending,
            dirty: self.dirty,
        }
    }

    pub fn channel(&self) -> ChannelState {
        self.channel
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Current bar width as a CSS-style percentage string.
    pub fn progress_width(&self) -> String {
        crate::view_model::progress_width(self.progress, self.progress_max)
    }

    pub(crate) fn mark_open(&mut self) {
        self.channel = ChannelState::Open;
    }

    pub(crate) fn mark_closed(&mut self) {
        self.channel = ChannelState::Closed;
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.dirty = true;
    }

    pub(crate) fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
        self.dirty = true;
    }

    pub(crate) fn step_progress(&mut self) -> String {
        self.progress += 1;
        self.dirty = true;
        self.progress_width()
    }

    pub(crate) fn set_progress_max(&mut self, max: f64) {
        self.progress_max = max;
    }

    /// True the first time a close is triggered; false on every later call.
    pub(crate) fn request_close(&mut self) -> bool {
        !std::mem::replace(&mut self.close_pending, true)
    }
}
