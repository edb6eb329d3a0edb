use futures_util::StreamExt;
use splash_logging::{splash_debug, splash_info};
use tokio_tungstenite::tungstenite::{self, Message};
use url::Url;

use crate::frame::decode_frame;
use crate::{DisconnectKind, FeedError, FeedEvent};

/// Status endpoint of the local launcher process.
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:18485/status";

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub endpoint: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: FeedEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<FeedEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<FeedEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: FeedEvent) {
        let _ = self.tx.send(event);
    }
}

/// One-shot subscription to the status channel. Emits `Opened` and the
/// decoded frames into the sink, returns once the stream ends. There is
/// no reconnection and no connect timeout; a silent endpoint keeps the
/// subscription in the connecting state indefinitely.
#[async_trait::async_trait]
pub trait Subscriber: Send + Sync {
    async fn subscribe(&self, sink: &dyn EventSink) -> Result<(), FeedError>;
}

#[derive(Debug, Clone)]
pub struct TungsteniteSubscriber {
    settings: FeedSettings,
}

impl TungsteniteSubscriber {
    pub fn new(settings: FeedSettings) -> Self {
        Self { settings }
    }

    fn parse_endpoint(&self) -> Result<Url, FeedError> {
        let url = Url::parse(&self.settings.endpoint)
            .map_err(|err| FeedError::new(DisconnectKind::InvalidEndpoint, err.to_string()))?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(FeedError::new(
                DisconnectKind::InvalidEndpoint,
                format!("endpoint must use ws:// or wss://, got {}://", url.scheme()),
            ));
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Subscriber for TungsteniteSubscriber {
    async fn subscribe(&self, sink: &dyn EventSink) -> Result<(), FeedError> {
        let endpoint = self.parse_endpoint()?;
        let (mut stream, _response) = tokio_tungstenite::connect_async(endpoint.as_str())
            .await
            .map_err(map_ws_error)?;
        splash_info!("status channel open endpoint={}", endpoint);
        sink.emit(FeedEvent::Opened);

        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => match decode_frame(&text) {
                    Ok(frame) => {
                        splash_debug!("frame {:?}", frame);
                        sink.emit(FeedEvent::Frame(frame));
                    }
                    Err(err) => {
                        splash_debug!("dropping malformed frame: {}", err);
                        sink.emit(FeedEvent::Malformed {
                            detail: err.to_string(),
                        });
                    }
                },
                Some(Ok(Message::Close(_))) | None => break,
                // Pings, pongs and binary frames are not part of the protocol.
                Some(Ok(_)) => {}
                Some(Err(tungstenite::Error::ConnectionClosed))
                | Some(Err(tungstenite::Error::AlreadyClosed)) => break,
                Some(Err(err)) => return Err(map_ws_error(err)),
            }
        }

        let _ = stream.close(None).await;
        Ok(())
    }
}

fn map_ws_error(err: tungstenite::Error) -> FeedError {
    match err {
        tungstenite::Error::Url(err) => {
            FeedError::new(DisconnectKind::InvalidEndpoint, err.to_string())
        }
        tungstenite::Error::Http(response) => FeedError::new(
            DisconnectKind::Rejected(response.status().as_u16()),
            format!("handshake rejected with http status {}", response.status()),
        ),
        tungstenite::Error::Protocol(err) => {
            FeedError::new(DisconnectKind::Protocol, err.to_string())
        }
        err => FeedError::new(DisconnectKind::Network, err.to_string()),
    }
}
