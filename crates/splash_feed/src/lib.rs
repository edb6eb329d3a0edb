//! Splash feed: websocket subscription to the launcher status channel.
mod feed;
mod frame;
mod socket;
mod types;

pub use feed::FeedHandle;
pub use frame::{decode_frame, FrameError};
pub use socket::{
    ChannelEventSink, EventSink, FeedSettings, Subscriber, TungsteniteSubscriber, DEFAULT_ENDPOINT,
};
pub use types::{DisconnectKind, FeedError, FeedEvent, StatusFrame};
