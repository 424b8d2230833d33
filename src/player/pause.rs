//---------------------------------------------------------------------------------------------------- Use
use crate::{
	macros::debug2,
	platform::{Platform,AudioResource},
	player::Player,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// Pause playback.
	///
	/// A scheduled (not yet issued) resource `play()` is cancelled.
	/// If already paused, nothing happens.
	pub fn pause(&mut self) {
		if self.disposed {
			return;
		}

		self.init_audio();

		if !self.is_playing() {
			return;
		}

		self.cancel_deferred_play();
		self.set_ui_paused();

		if let Some(audio) = self.audio.as_mut() {
			audio.pause();
		}

		debug2!("player: paused");
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::{
		platform::ResourceEvent,
		state::UiFlag,
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn pause() {
		let mut player = crate::tests::init();
		player.play(None);
		crate::tests::advance(&mut player, 500);
		assert!(player.is_playing());

		player.pause();
		assert!(player.flags().contains(UiFlag::Pause));
		assert!(!player.flags().contains(UiFlag::Play));
		assert!(player.audio().unwrap().paused);
		assert_eq!(player.audio().unwrap().pause_count, 1);

		// Already paused.
		player.pause();
		assert_eq!(player.audio().unwrap().pause_count, 1);
	}

	#[test]
	fn pause_cancels_deferred_play() {
		let mut player = crate::tests::init();
		player.play(None);
		crate::tests::advance(&mut player, 200);

		player.pause();
		assert!(!player.is_play_pending());
		assert!(player.flags().contains(UiFlag::Pause));

		crate::tests::advance(&mut player, 10_000);
		assert_eq!(player.audio().unwrap().play_count, 0);
		assert!(player.audio().unwrap().paused);
		assert!(player.flags().contains(UiFlag::Pause));
	}

	#[test]
	fn pause_clears_loading() {
		let mut player = crate::tests::init();
		player.play(None);
		crate::tests::advance(&mut player, 500);
		player.handle(ResourceEvent::Waiting);
		assert!(player.flags().contains(UiFlag::Loading));

		player.pause();
		assert!(!player.flags().contains(UiFlag::Loading));
	}

	#[test]
	fn pause_creates_audio() {
		let mut player = crate::tests::init();
		player.pause();
		assert!(player.audio().is_some());
		assert_eq!(player.audio().unwrap().pause_count, 0);
		assert!(player.flags().contains(UiFlag::Pause));
	}
}
