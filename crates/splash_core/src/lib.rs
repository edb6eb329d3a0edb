//! Splash core: pure status state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, CLOSE_GRACE};
pub use msg::Msg;
pub use state::{ChannelState, ClientState};
pub use update::update;
pub use view_model::{progress_width, SplashViewModel};
