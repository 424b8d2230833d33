//! Player state.
//!
//! [`Flags`] is what the player _shows_,
//! [`PlaybackState`] is what the player _knows_.

mod flags;
pub use flags::{UiFlag,Flags};

mod playback_state;
pub use playback_state::PlaybackState;
