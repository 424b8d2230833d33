//! The playback controller.
//!
//! [`Player`] is defined in `player.rs`, every
//! other file adds one operation to it.

mod player;
pub use player::Player;

mod init;
mod play;
mod pause;
mod toggle;
mod seek;
mod mute;
mod speed;
mod drag;
mod event;
mod shutdown;
