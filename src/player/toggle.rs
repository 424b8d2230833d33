//---------------------------------------------------------------------------------------------------- Use
use crate::{
	platform::Platform,
	player::Player,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// [`Player::pause`] if playing (or about to), else [`Player::play`].
	///
	/// Creates the audio resource if this is the first request.
	pub fn toggle(&mut self) {
		if self.disposed {
			return;
		}

		self.init_audio();

		if self.audio.is_none() {
			return;
		}

		// INVARIANT:
		// Both `pause()` and `play()` keep
		// exactly one of `Play`/`Pause` set.
		if self.is_playing() {
			self.pause();
		} else {
			self.play(None);
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::state::UiFlag;
	use pretty_assertions::assert_eq;

	fn exactly_one(player: &crate::Player<crate::platform::dummy::DummyPlatform>) -> bool {
		player.flags().contains(UiFlag::Play) != player.flags().contains(UiFlag::Pause)
	}

	#[test]
	fn toggle() {
		let mut player = crate::tests::init();
		assert!(exactly_one(&player));

		player.toggle();
		assert!(player.flags().contains(UiFlag::Play));
		assert!(exactly_one(&player));

		// Toggling while the play is still pending pauses.
		player.toggle();
		assert!(player.flags().contains(UiFlag::Pause));
		assert!(exactly_one(&player));
		crate::tests::advance(&mut player, 500);
		assert_eq!(player.audio().unwrap().play_count, 0);

		player.toggle();
		crate::tests::advance(&mut player, 500);
		assert!(!player.audio().unwrap().paused);

		player.toggle();
		assert!(player.audio().unwrap().paused);
		assert!(player.flags().contains(UiFlag::Pause));
		assert!(exactly_one(&player));
	}

	#[test]
	fn any_sequence_keeps_one_flag() {
		let mut player = crate::tests::init();

		// A fixed pseudo-random walk over play/pause/toggle/tick.
		let mut seed: u32 = 0x2545_f491;
		for _ in 0..500 {
			seed ^= seed << 13;
			seed ^= seed >> 17;
			seed ^= seed << 5;
			match seed % 4 {
				0 => player.play(None),
				1 => player.pause(),
				2 => player.toggle(),
				_ => crate::tests::advance(&mut player, u64::from(seed % 700)),
			}
			assert!(exactly_one(&player), "{player:?}");
		}
	}
}
