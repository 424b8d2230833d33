//---------------------------------------------------------------------------------------------------- Use
#[allow(unused_imports)] // docs
use crate::Player;

//---------------------------------------------------------------------------------------------------- PlaybackState
/// What the [`Player`] knows about playback.
///
/// Owned by the [`Player`], only ever mutated by its
/// methods and by audio resource events. The audio
/// resource handle itself lives in the [`Player`],
/// see [`Player::audio`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct PlaybackState {
	/// Has the audio resource been created?
	pub inited: bool,
	/// Is audio muted?
	///
	/// This survives track switches.
	pub muted: bool,
	/// Is a drag gesture on the seek bar in progress?
	pub dragging: bool,
	/// Current playback rate, always one of the speed options.
	pub current_speed: f64,
	/// Last known position in seconds, within `0.0..=duration`.
	///
	/// While dragging this is the previewed position.
	pub current_time: f64,
}

impl PlaybackState {
	#[must_use]
	/// Fresh state, nothing created yet.
	pub const fn new(muted: bool, current_speed: f64) -> Self {
		Self {
			inited: false,
			muted,
			dragging: false,
			current_speed,
			current_time: 0.0,
		}
	}
}
