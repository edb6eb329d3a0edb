#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Transport handshake completed; the status channel is live.
    ChannelOpened,
    /// Server asked the window to shut down.
    CloseRequested,
    /// One unit of launcher work finished.
    ProgressStepped,
    /// Expected total number of progress steps.
    ProgressMaxSet(f64),
    /// Replace the window title line.
    TitleChanged(String),
    /// Free-form status text for the message region.
    StatusPosted(String),
    /// Transport failed; the text is surfaced to the user.
    ChannelFailed { message: String },
    /// Transport shut down, cleanly or after a failure.
    ChannelClosed,
}
