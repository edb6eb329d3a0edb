use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use futures_util::SinkExt;
use pretty_assertions::assert_eq;
use splash_feed::{
    DisconnectKind, EventSink, FeedError, FeedEvent, FeedHandle, FeedSettings, StatusFrame,
    Subscriber, TungsteniteSubscriber,
};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

struct TestSink {
    events: Arc<Mutex<Vec<FeedEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take(&self) -> Vec<FeedEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: FeedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Serves a single websocket session on the current runtime: sends the
/// given frames, then closes.
async fn spawn_server(frames: Vec<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream)
            .await
            .expect("websocket handshake");
        for frame in frames {
            ws.send(Message::Text(frame.to_string()))
                .await
                .expect("send frame");
        }
        ws.close(None).await.expect("close");
    });
    format!("ws://{addr}/status")
}

#[tokio::test]
async fn subscriber_relays_the_whole_session() {
    let endpoint = spawn_server(vec![
        r#"{"type":"title","payload":"Build X"}"#,
        r#"{"type":"progress_max","payload":"3"}"#,
        r#"{"type":"progress_step"}"#,
        r#"{"type":"close"}"#,
    ])
    .await;

    let subscriber = TungsteniteSubscriber::new(FeedSettings { endpoint });
    let sink = TestSink::new();
    subscriber
        .subscribe(&sink)
        .await
        .expect("subscription ends cleanly");

    assert_eq!(
        sink.take(),
        vec![
            FeedEvent::Opened,
            FeedEvent::Frame(StatusFrame::Title("Build X".to_string())),
            FeedEvent::Frame(StatusFrame::ProgressMax(3.0)),
            FeedEvent::Frame(StatusFrame::ProgressStep),
            FeedEvent::Frame(StatusFrame::Close),
        ]
    );
}

#[test]
fn default_settings_point_at_the_fixed_local_endpoint() {
    assert_eq!(splash_feed::DEFAULT_ENDPOINT, "ws://localhost:18485/status");
    assert_eq!(
        FeedSettings::default().endpoint,
        "ws://localhost:18485/status"
    );
}

#[tokio::test]
async fn non_text_frames_are_skipped() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = tokio_tungstenite::accept_async(stream)
            .await
            .expect("websocket handshake");
        ws.send(Message::Binary(vec![0xde, 0xad])).await.expect("send binary");
        ws.send(Message::Ping(Vec::new())).await.expect("send ping");
        ws.send(Message::Text(
            r#"{"type":"message","payload":"after noise"}"#.to_string(),
        ))
        .await
        .expect("send frame");
        ws.close(None).await.expect("close");
    });

    let subscriber = TungsteniteSubscriber::new(FeedSettings {
        endpoint: format!("ws://{addr}/status"),
    });
    let sink = TestSink::new();
    subscriber
        .subscribe(&sink)
        .await
        .expect("subscription ends cleanly");

    assert_eq!(
        sink.take(),
        vec![
            FeedEvent::Opened,
            FeedEvent::Frame(StatusFrame::Status("after noise".to_string())),
        ]
    );
}

#[tokio::test]
async fn malformed_frames_do_not_end_the_stream() {
    let endpoint = spawn_server(vec![
        "{oops",
        r#"{"type":"message","payload":"still here"}"#,
    ])
    .await;

    let subscriber = TungsteniteSubscriber::new(FeedSettings { endpoint });
    let sink = TestSink::new();
    subscriber
        .subscribe(&sink)
        .await
        .expect("subscription survives the bad frame");

    let events = sink.take();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], FeedEvent::Opened);
    assert!(matches!(events[1], FeedEvent::Malformed { .. }));
    assert_eq!(
        events[2],
        FeedEvent::Frame(StatusFrame::Status("still here".to_string()))
    );
}

#[tokio::test]
async fn refused_connection_reports_a_network_failure() {
    // Bind a port and drop the listener so the connect is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let subscriber = TungsteniteSubscriber::new(FeedSettings {
        endpoint: format!("ws://{addr}/status"),
    });
    let sink = TestSink::new();
    let err = subscriber
        .subscribe(&sink)
        .await
        .expect_err("connect must fail");

    assert_eq!(err.kind, DisconnectKind::Network);
    assert!(sink.take().is_empty());
}

#[tokio::test]
async fn non_websocket_schemes_are_rejected_before_connecting() {
    let subscriber = TungsteniteSubscriber::new(FeedSettings {
        endpoint: "http://localhost:18485/status".to_string(),
    });
    let sink = TestSink::new();
    let err = subscriber
        .subscribe(&sink)
        .await
        .expect_err("scheme must be rejected");

    assert_eq!(err.kind, DisconnectKind::InvalidEndpoint);
    assert!(sink.take().is_empty());
}

/// Serves a single session from its own thread and runtime, for driving
/// the handle from synchronous tests.
fn spawn_script_server(frames: Vec<&'static str>) -> String {
    let (addr_tx, addr_rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        runtime.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            addr_tx
                .send(listener.local_addr().expect("local addr"))
                .expect("send addr");
            let (stream, _) = listener.accept().await.expect("accept");
            let mut ws = tokio_tungstenite::accept_async(stream)
                .await
                .expect("websocket handshake");
            for frame in frames {
                ws.send(Message::Text(frame.to_string()))
                    .await
                    .expect("send frame");
            }
            ws.close(None).await.expect("close");
        });
    });
    let addr = addr_rx.recv().expect("server address");
    format!("ws://{addr}/status")
}

#[test]
fn feed_handle_drains_to_closed() {
    let endpoint = spawn_script_server(vec![r#"{"type":"message","payload":"Verifying"}"#]);
    let feed = FeedHandle::connect(FeedSettings { endpoint });

    let mut events = Vec::new();
    while let Some(event) = feed.recv() {
        events.push(event);
    }

    assert_eq!(
        events,
        vec![
            FeedEvent::Opened,
            FeedEvent::Frame(StatusFrame::Status("Verifying".to_string())),
            FeedEvent::Closed,
        ]
    );
    assert!(feed.try_recv().is_none());
}

struct FailingSubscriber;

#[async_trait::async_trait]
impl Subscriber for FailingSubscriber {
    async fn subscribe(&self, sink: &dyn EventSink) -> Result<(), FeedError> {
        sink.emit(FeedEvent::Opened);
        sink.emit(FeedEvent::Frame(StatusFrame::ProgressStep));
        Err(FeedError {
            kind: DisconnectKind::Protocol,
            message: "mid-stream failure".to_string(),
        })
    }
}

#[test]
fn injected_subscriber_failures_surface_before_closed() {
    let feed = FeedHandle::with_subscriber(Arc::new(FailingSubscriber));

    let mut events = Vec::new();
    while let Some(event) = feed.recv() {
        events.push(event);
    }

    assert_eq!(
        events,
        vec![
            FeedEvent::Opened,
            FeedEvent::Frame(StatusFrame::ProgressStep),
            FeedEvent::Failed {
                kind: DisconnectKind::Protocol,
                message: "mid-stream failure".to_string(),
            },
            FeedEvent::Closed,
        ]
    );
}
