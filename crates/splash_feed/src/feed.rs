use std::sync::{mpsc, Arc};
use std::thread;

use splash_logging::{splash_info, splash_warn};

use crate::socket::{ChannelEventSink, EventSink, FeedSettings, Subscriber, TungsteniteSubscriber};
use crate::FeedEvent;

/// Runs one subscription on a background thread and hands its events out
/// over a channel. The thread ends when the stream does; there is no
/// reconnection.
pub struct FeedHandle {
    event_rx: mpsc::Receiver<FeedEvent>,
}

impl FeedHandle {
    /// Connects to the launcher status endpoint.
    pub fn connect(settings: FeedSettings) -> Self {
        Self::with_subscriber(Arc::new(TungsteniteSubscriber::new(settings)))
    }

    /// Runs a custom subscriber; used to inject fakes in tests.
    pub fn with_subscriber(subscriber: Arc<dyn Subscriber>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            runtime.block_on(run_subscription(subscriber.as_ref(), event_tx));
        });

        Self { event_rx }
    }

    /// Next event if one is ready, for hosts that poll.
    pub fn try_recv(&self) -> Option<FeedEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the feed has shut down.
    pub fn recv(&self) -> Option<FeedEvent> {
        self.event_rx.recv().ok()
    }
}

async fn run_subscription(subscriber: &dyn Subscriber, event_tx: mpsc::Sender<FeedEvent>) {
    let sink = ChannelEventSink::new(event_tx);
    match subscriber.subscribe(&sink).await {
        Ok(()) => splash_info!("status channel closed by remote"),
        Err(err) => {
            splash_warn!("status channel failed: {} ({})", err.message, err.kind);
            sink.emit(FeedEvent::Failed {
                kind: err.kind,
                message: err.message,
            });
        }
    }
    sink.emit(FeedEvent::Closed);
}
