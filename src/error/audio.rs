//---------------------------------------------------------------------------------------------------- use
#[allow(unused_imports)] // docs
use crate::platform::AudioResource;

//---------------------------------------------------------------------------------------------------- AudioError
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Why an [`AudioResource`] refused to start playing.
///
/// These are transient platform conditions, the player
/// degrades (logs and shows itself as paused) instead of failing.
pub enum AudioError {
	#[error("playback was not allowed by the platform")]
	/// e.g. an autoplay policy blocked playback without a user gesture
	NotAllowed,

	#[error("the media source is not supported")]
	/// The resource could not decode the source
	NotSupported,

	#[error("audio error: {0}")]
	/// Anything else the platform reported
	Other(String),
}
