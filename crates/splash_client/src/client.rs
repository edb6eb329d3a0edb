use std::sync::Arc;
use std::time::Duration;

use splash_core::{update, ClientState, Effect, Msg, SplashViewModel, CLOSE_GRACE};
use splash_feed::FeedHandle;
use splash_logging::{splash_debug, splash_info};

use crate::bridge::map_event;
use crate::surface::{StatusSurface, WindowHost};
use crate::timer::CloseTimer;

/// Behaviour knobs for a [`StatusClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Delay between a close trigger and the window close request.
    pub close_grace: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            close_grace: CLOSE_GRACE,
        }
    }
}

/// Owns the status state machine and pushes its output onto a host
/// surface. Constructed once at startup; one client per window.
pub struct StatusClient<S: StatusSurface> {
    state: ClientState,
    surface: S,
    host: Arc<dyn WindowHost>,
    config: ClientConfig,
    close_timer: Option<CloseTimer>,
    seq: u64,
}

impl<S: StatusSurface> StatusClient<S> {
    pub fn new(surface: S, host: Arc<dyn WindowHost>) -> Self {
        Self::with_config(surface, host, ClientConfig::default())
    }

    pub fn with_config(surface: S, host: Arc<dyn WindowHost>, config: ClientConfig) -> Self {
        Self {
            state: ClientState::new(),
            surface,
            host,
            config,
            close_timer: None,
            seq: 0,
        }
    }

    /// Applies one message and executes whatever effects it produced.
    pub fn apply(&mut self, msg: Msg) {
        self.seq += 1;
        splash_debug!("apply seq={} msg={:?}", self.seq, msg);
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Drains the feed until it shuts down, applying each event to
    /// completion before reading the next. Returns the surface so the
    /// host can keep using it.
    pub fn run(mut self, feed: &FeedHandle) -> S {
        while let Some(event) = feed.recv() {
            if let Some(msg) = map_event(event) {
                self.apply(msg);
            }
        }
        splash_info!("status feed drained after {} events", self.seq);
        self.surface
    }

    /// Current state projection, for hosts that poll.
    pub fn view(&self) -> SplashViewModel {
        self.state.view()
    }

    /// Whether the view changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// True while a deferred close is pending.
    pub fn close_scheduled(&self) -> bool {
        self.close_timer.is_some()
    }

    /// Cancels a pending deferred close, if any.
    pub fn cancel_close(&mut self) {
        if let Some(timer) = self.close_timer.take() {
            timer.cancel();
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ShowStatus(text) => self.surface.show_status(&text),
            Effect::ShowTitle(text) => self.surface.show_title(&text),
            Effect::SetProgressWidth(width) => self.surface.set_progress_width(&width),
            Effect::ScheduleClose => {
                splash_info!("window close scheduled in {:?}", self.config.close_grace);
                self.close_timer = Some(CloseTimer::schedule(
                    self.config.close_grace,
                    self.host.clone(),
                ));
            }
        }
    }
}
