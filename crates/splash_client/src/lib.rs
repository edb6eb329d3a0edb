//! Splash client: drives the launcher status feed onto a host window.
mod bridge;
mod client;
mod surface;
mod timer;

pub use bridge::map_event;
pub use client::{ClientConfig, StatusClient};
pub use surface::{LineSurface, StatusSurface, WindowHost};
pub use timer::CloseTimer;
