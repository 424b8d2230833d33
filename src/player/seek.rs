//! Seeking and duration.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	bar::fraction,
	config::SEEK_STEP,
	macros::trace2,
	platform::{Platform,AudioResource,BarKind},
	player::Player,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	#[must_use]
	/// Total duration in seconds, `0.0` if unknown.
	///
	/// Before the audio resource exists this is the current
	/// track's declared duration. After, it is whatever the
	/// resource reports, some platforms briefly report a
	/// duration that isn't a number, that is also `0.0`.
	pub fn duration(&self) -> f64 {
		match self.audio.as_ref() {
			Some(audio) => {
				let duration = audio.duration();
				if duration.is_finite() && duration > 0.0 {
					duration
				} else {
					0.0
				}
			},
			None => self.track.declared_duration(),
		}
	}

	/// Move playback to `time` seconds, clamped to `0.0..=duration`.
	///
	/// The time label and the played fraction update immediately.
	/// If the audio resource does not exist yet, the position is
	/// remembered and applied once it does.
	pub fn seek(&mut self, time: f64) {
		if self.disposed {
			return;
		}

		let duration = self.duration();
		let time = if time.is_nan() { 0.0 } else { time.clamp(0.0, duration) };

		self.set_time_label(time);
		self.state.current_time = time;
		self.set_bar(BarKind::AudioPlayed, fraction(time, duration));

		if let Some(audio) = self.audio.as_mut() {
			audio.set_current_time(time);
		}

		trace2!("player: seek -> {time}");
	}

	/// Skip forward [`SEEK_STEP`] seconds.
	pub fn forward(&mut self) {
		let time = (self.state.current_time + SEEK_STEP).min(self.duration());
		self.seek(time);
	}

	/// Skip backward [`SEEK_STEP`] seconds.
	pub fn backward(&mut self) {
		let time = (self.state.current_time - SEEK_STEP).max(0.0);
		self.seek(time);
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::{
		format::second_to_time,
		platform::{Label,BarKind},
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn seek_updates_label_and_bar() {
		let mut player = crate::tests::init();

		for t in [0.0, 0.5, 1.0, 25.0, 59.9, 60.0, 99.0, 100.0] {
			player.seek(t);
			assert_eq!(player.view().text(Label::CurrentTime), second_to_time(t));
			assert_eq!(player.state().current_time, t);
			assert_eq!(player.bar().played(), t / 100.0);
		}
	}

	#[test]
	fn seek_clamps() {
		let mut player = crate::tests::init();

		player.seek(-5.0);
		assert_eq!(player.state().current_time, 0.0);
		assert_eq!(player.bar().played(), 0.0);

		player.seek(200.0);
		assert_eq!(player.state().current_time, 100.0);
		assert_eq!(player.bar().played(), 1.0);
		assert_eq!(player.view().text(Label::CurrentTime), "01:40");

		player.seek(f64::NAN);
		assert_eq!(player.state().current_time, 0.0);
	}

	#[test]
	fn seek_with_audio() {
		let mut player = crate::tests::loaded(300.0);

		player.seek(150.0);
		assert_eq!(player.audio().unwrap().current_time, 150.0);
		assert_eq!(player.bar().played(), 0.5);
		assert_eq!(player.view().bar(BarKind::AudioPlayed), "50%");
	}

	#[test]
	fn zero_duration() {
		let mut player = crate::tests::loaded(f64::NAN);
		assert_eq!(player.duration(), 0.0);

		player.seek(10.0);
		assert_eq!(player.state().current_time, 0.0);
		assert_eq!(player.bar().played(), 0.0);
	}

	#[test]
	fn duration_sources() {
		let mut player = crate::tests::init();
		assert_eq!(player.duration(), 100.0);

		// Resource exists but hasn't reported yet.
		player.init_audio();
		assert_eq!(player.duration(), 0.0);

		player.audio_mut().unwrap().duration = 250.0;
		assert_eq!(player.duration(), 250.0);

		player.audio_mut().unwrap().duration = f64::INFINITY;
		assert_eq!(player.duration(), 0.0);
	}

	#[test]
	fn forward_backward() {
		let mut player = crate::tests::init();

		player.forward();
		assert_eq!(player.state().current_time, 10.0);

		player.seek(95.0);
		player.forward();
		assert_eq!(player.state().current_time, 100.0);

		player.backward();
		assert_eq!(player.state().current_time, 90.0);

		player.seek(4.0);
		player.backward();
		assert_eq!(player.state().current_time, 0.0);
	}
}
