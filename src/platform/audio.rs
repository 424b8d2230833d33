//---------------------------------------------------------------------------------------------------- use
use crate::{
	config::Preload,
	error::AudioError,
};

#[allow(unused_imports)] // docs
use crate::{Player, platform::ResourceEvent};

//---------------------------------------------------------------------------------------------------- AudioResource
/// A platform's decodable media playback handle.
///
/// This mirrors an HTML audio element. Properties are plain
/// setters/getters, lifecycle is reported asynchronously through
/// the [`ResourceEvent`] channel handed to the constructor.
///
/// The [`Player`] exclusively owns its resource and
/// releases it by dropping it.
pub trait AudioResource {
	/// Swap the media source.
	///
	/// This resets the resource to a paused state at position `0.0`.
	/// An empty string unloads the current source.
	fn set_src(&mut self, src: &str);

	/// Set the preload mode.
	fn set_preload(&mut self, preload: Preload);

	/// Start playing automatically once enough data is available.
	fn set_autoplay(&mut self, autoplay: bool);

	/// Mute or unmute.
	fn set_muted(&mut self, muted: bool);

	/// Set the playback rate, `1.0` is normal speed.
	fn set_playback_rate(&mut self, rate: f64);

	/// Current position in seconds.
	fn current_time(&self) -> f64;

	/// Move to position `time` in seconds.
	fn set_current_time(&mut self, time: f64);

	/// Total duration in seconds.
	///
	/// This may be [`f64::NAN`] while unknown.
	fn duration(&self) -> f64;

	/// End (in seconds) of the last buffered range, if anything is buffered.
	fn buffered_end(&self) -> Option<f64>;

	/// Is the resource paused?
	fn paused(&self) -> bool;

	/// Start playing.
	///
	/// # Errors
	/// The platform may refuse, e.g. due to an autoplay policy.
	fn play(&mut self) -> Result<(), AudioError>;

	/// Pause.
	fn pause(&mut self);

	/// Reset and re-select the source.
	fn load(&mut self);
}
