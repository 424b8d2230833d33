//---------------------------------------------------------------------------------------------------- Use
use crate::{
	macros::debug2,
	platform::{Platform,AudioResource},
	player::Player,
	state::UiFlag,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// Flip mute.
	///
	/// The setting is kept by the player, so it carries over track
	/// switches and is applied to the resource when it is created.
	pub fn toggle_mute(&mut self) {
		if self.disposed {
			return;
		}

		self.state.muted = !self.state.muted;
		let muted = self.state.muted;

		self.set_flag(UiFlag::Mute, muted);
		if let Some(audio) = self.audio.as_mut() {
			audio.set_muted(muted);
		}

		debug2!("player: muted -> {muted}");
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::state::UiFlag;

	#[test]
	fn toggle_mute() {
		let mut player = crate::tests::init();

		player.toggle_mute();
		assert!(player.state().muted);
		assert!(player.flags().contains(UiFlag::Mute));
		assert!(player.view().flags.contains(UiFlag::Mute));

		// Applied on creation.
		player.init_audio();
		assert!(player.audio().unwrap().muted);

		player.toggle_mute();
		assert!(!player.state().muted);
		assert!(!player.flags().contains(UiFlag::Mute));
		assert!(!player.audio().unwrap().muted);
	}
}
