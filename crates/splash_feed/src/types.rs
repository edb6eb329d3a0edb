use std::fmt;

/// Decoded status frame, one variant per wire message type.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusFrame {
    /// Shut the window down after the grace delay.
    Close,
    /// One unit of launcher work finished.
    ProgressStep,
    /// Expected total number of progress steps.
    ProgressMax(f64),
    /// Window title replacement.
    Title(String),
    /// Free text for the status line. Unrecognized tags land here too.
    Status(String),
}

/// What the subscription reports to its sink.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// Handshake finished; the channel is live.
    Opened,
    /// One decoded status frame.
    Frame(StatusFrame),
    /// A frame that failed to decode. Dropped without touching state.
    Malformed { detail: String },
    /// The transport failed. At most once, always before `Closed`.
    Failed { kind: DisconnectKind, message: String },
    /// The transport is gone. Always the last event.
    Closed,
}

/// Terminal subscription failure.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedError {
    pub kind: DisconnectKind,
    pub message: String,
}

impl FeedError {
    pub(crate) fn new(kind: DisconnectKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectKind {
    InvalidEndpoint,
    Rejected(u16),
    Protocol,
    Network,
}

impl fmt::Display for DisconnectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisconnectKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            DisconnectKind::Rejected(code) => write!(f, "handshake rejected (http status {code})"),
            DisconnectKind::Protocol => write!(f, "websocket protocol error"),
            DisconnectKind::Network => write!(f, "network error"),
        }
    }
}
