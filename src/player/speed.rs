//---------------------------------------------------------------------------------------------------- Use
use crate::{
	format::speed_label,
	macros::debug2,
	platform::{Platform,View,AudioResource,Label},
	player::Player,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// Move to the next speed option, wrapping around.
	pub fn cycle_speed(&mut self) {
		if self.disposed {
			return;
		}

		let options = self.settings.speed_options();
		let next = match options.iter().position(|s| *s == self.state.current_speed) {
			Some(i) if i + 1 < options.len() => options[i + 1],
			_ => options[0],
		};

		self.state.current_speed = next;
		self.view.set_text(Label::Speed, &speed_label(next));
		if let Some(audio) = self.audio.as_mut() {
			audio.set_playback_rate(next);
		}

		debug2!("player: speed -> {next}");
	}
}
