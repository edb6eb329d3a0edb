use splash_core::Msg;
use splash_feed::{FeedEvent, StatusFrame};
use splash_logging::splash_warn;

/// Maps a feed event onto the state machine vocabulary. Malformed frames
/// are logged and dropped here; they never reach the state.
pub fn map_event(event: FeedEvent) -> Option<Msg> {
    let msg = match event {
        FeedEvent::Opened => Msg::ChannelOpened,
        FeedEvent::Frame(frame) => map_frame(frame),
        FeedEvent::Malformed { detail } => {
            splash_warn!("ignoring malformed status frame: {}", detail);
            return None;
        }
        FeedEvent::Failed { message, .. } => Msg::ChannelFailed { message },
        FeedEvent::Closed => Msg::ChannelClosed,
    };
    Some(msg)
}

fn map_frame(frame: StatusFrame) -> Msg {
    match frame {
        StatusFrame::Close => Msg::CloseRequested,
        StatusFrame::ProgressStep => Msg::ProgressStepped,
        StatusFrame::ProgressMax(max) => Msg::ProgressMaxSet(max),
        StatusFrame::Title(text) => Msg::TitleChanged(text),
        StatusFrame::Status(text) => Msg::StatusPosted(text),
    }
}
