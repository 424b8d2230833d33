//---------------------------------------------------------------------------------------------------- use
#[allow(unused_imports)] // docs
use crate::config::{Config,Settings};

//---------------------------------------------------------------------------------------------------- ConfigError
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
/// A [`Config`] that cannot become [`Settings`].
pub enum ConfigError {
	#[error("the audio list is empty")]
	/// `audio` had no tracks
	EmptyAudio,

	#[error("track {index} has no source")]
	/// A track had an empty `src`
	MissingSource {
		/// Index of the offending track in `audio`
		index: usize,
	},

	#[error("speed option {0} is not a positive finite number")]
	/// A speed option was `<= 0.0`, `NaN` or infinite
	InvalidSpeed(f64),
}
