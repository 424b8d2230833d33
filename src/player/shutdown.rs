//! Disposal.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	macros::info2,
	platform::{Platform,AudioResource},
	player::Player,
	state::UiFlag,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// Tear the player down.
	///
	/// - a pending resource `play()` is cancelled
	/// - the audio resource is paused, unloaded and released
	/// - the title carousel and every other timer is cancelled
	/// - the `keyup` listener and any drag listeners are removed,
	///   an interrupted drag no longer shows as seeking
	///
	/// Afterwards every method is a no-op. Calling this more
	/// than once is fine, it also runs on [`Drop`].
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}

		self.cancel_deferred_play();

		if let Some(mut audio) = self.audio.take() {
			audio.pause();
			audio.set_src("");
			audio.load();
		}
		self.events = None;

		self.stop_carousel();
		self.timers.clear();

		if let Some(id) = self.key_listener.take() {
			self.platform.unlisten(id);
		}
		if let Some(listeners) = self.drag.take() {
			self.release_drag(listeners);
			self.set_flag(UiFlag::Seeking, false);
		}

		self.disposed = true;
		info2!("player: disposed");
	}
}
