//---------------------------------------------------------------------------------------------------- use
use crate::{
	platform::{AudioResource,View,Input,ResourceEvent,ListenerId},
	track::Track,
};
use crossbeam::channel::Sender;
use std::time::Duration;

#[allow(unused_imports)] // docs
use crate::Player;

//---------------------------------------------------------------------------------------------------- Platform
/// Everything the [`Player`] needs from its host.
///
/// All methods are called from the same thread that drives
/// the [`Player`], there is no concurrency to account for.
pub trait Platform {
	/// The audio resource this platform creates.
	type Audio: AudioResource;
	/// The bound markup this platform creates.
	type View: View;

	/// Find the container element with class `class`, inject
	/// the player markup into it and return handles to it,
	/// populated with `track`'s text.
	///
	/// Returns [`None`] if no such container exists.
	fn mount(&mut self, class: &str, track: &Track) -> Option<Self::View>;

	/// Read the theme color (e.g. the [`crate::config::THEME_PROPERTY`]
	/// custom property), if one is set.
	fn theme_color(&self) -> Option<String>;

	/// Construct a new audio resource.
	///
	/// The resource must report its lifecycle by sending
	/// [`ResourceEvent`]'s into `events`. The [`Player`]
	/// drains them in [`Player::tick`].
	///
	/// This is only called the first time playback is requested.
	fn create_audio(&mut self, events: Sender<ResourceEvent>) -> Self::Audio;

	/// Start routing the process-wide (document level) event
	/// named `event` to the [`Player`].
	fn listen(&mut self, event: &'static str) -> ListenerId;

	/// Stop routing the listener `id`.
	///
	/// The [`Player`] calls this exactly once per [`Self::listen`].
	fn unlisten(&mut self, id: ListenerId);

	/// A monotonic clock, used to drive timers.
	fn now(&self) -> Duration;

	/// The kind of pointer input this platform produces.
	///
	/// Read once at [`Player::init`].
	fn input(&self) -> Input {
		Input::native()
	}
}
