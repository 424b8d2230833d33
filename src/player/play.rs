//! Play, in two phases.
//!
//! Phase one flips the UI to "playing" right away. Phase two, the
//! resource `play()`, is issued [`PLAY_DELAY`] later from
//! [`Player::tick`]. Until then the request can be cancelled by
//! [`Player::pause`] or [`Player::dispose`].
//!
//! If the resource refuses in phase two the UI goes back to "paused".

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	config::PLAY_DELAY,
	macros::{debug2,warn2},
	platform::{Platform,View,AudioResource,BarKind},
	player::Player,
	timer::TimerKind,
	track::Track,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// Start playback.
	///
	/// Creates the audio resource if this is the first request.
	///
	/// If `track` is given and has a source, it replaces the current
	/// track: the view is updated, the position resets to `0.0` and
	/// the resource is pointed at the new source. Mute and speed carry over.
	///
	/// If already playing (or about to), nothing else happens.
	pub fn play(&mut self, track: Option<Track>) {
		if self.disposed {
			return;
		}

		self.init_audio();

		if let Some(track) = track.filter(Track::has_src) {
			self.switch_track(track);
		}

		if self.audio.is_none() || self.is_playing() {
			return;
		}

		self.set_ui_playing();

		let now = self.platform.now();
		self.deferred_play = Some(self.timers.timeout(TimerKind::DeferredPlay, now, PLAY_DELAY));

		debug2!("player: play scheduled in {PLAY_DELAY:?}");
	}

	fn switch_track(&mut self, track: Track) {
		debug2!("player: switching track {} -> {}", self.track.src, track.src);

		self.view.update(&track);
		self.track = track;

		self.state.current_time = 0.0;
		self.set_time_label(0.0);
		self.set_duration_label(self.track.declared_duration());
		self.set_bar(BarKind::AudioPlayed, 0.0);
		self.set_bar(BarKind::AudioLoaded, 0.0);

		let src = self.track.src.clone();
		self.update_audio(&src);

		self.start_carousel();
	}

	/// Cancel a scheduled resource `play()`, returns `true` if one was pending.
	pub(super) fn cancel_deferred_play(&mut self) -> bool {
		match self.deferred_play.take() {
			Some(id) => self.timers.cancel(id),
			None => false,
		}
	}

	/// Phase two of [`Player::play`].
	pub(super) fn fire_deferred_play(&mut self) {
		self.deferred_play = None;

		let Some(audio) = self.audio.as_mut() else {
			return;
		};

		match audio.play() {
			Ok(()) => debug2!("player: audio playing"),
			Err(e) => {
				warn2!("player: audio refused to play: {e}");
				self.set_ui_paused();
			},
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::{
		error::AudioError,
		platform::{Label,BarKind,ResourceEvent},
		state::UiFlag,
		track::Track,
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn play_is_deferred() {
		let mut player = crate::tests::init();
		assert!(player.flags().contains(UiFlag::Pause));

		player.play(None);
		assert!(player.flags().contains(UiFlag::Play));
		assert!(!player.flags().contains(UiFlag::Pause));
		assert!(player.is_play_pending());
		assert_eq!(player.audio().unwrap().play_count, 0);

		crate::tests::advance(&mut player, 499);
		assert_eq!(player.audio().unwrap().play_count, 0);
		assert!(player.audio().unwrap().paused);

		crate::tests::advance(&mut player, 1);
		assert_eq!(player.audio().unwrap().play_count, 1);
		assert!(!player.audio().unwrap().paused);
		assert!(!player.is_play_pending());
		assert!(player.flags().contains(UiFlag::Play));
	}

	#[test]
	fn play_is_idempotent() {
		let mut player = crate::tests::init();

		// While pending.
		player.play(None);
		player.play(None);
		crate::tests::advance(&mut player, 500);
		assert_eq!(player.audio().unwrap().play_count, 1);

		// While playing.
		player.play(None);
		assert!(!player.is_play_pending());
		crate::tests::advance(&mut player, 1000);
		assert_eq!(player.audio().unwrap().play_count, 1);
		assert!(player.flags().contains(UiFlag::Play));
		assert!(!player.flags().contains(UiFlag::Pause));
	}

	#[test]
	fn rejected_play_reverts_ui() {
		let mut player = crate::tests::init();
		player.init_audio();
		player.audio_mut().unwrap().reject = Some(AudioError::NotAllowed);

		player.play(None);
		assert!(player.flags().contains(UiFlag::Play));

		crate::tests::advance(&mut player, 500);
		assert!(player.flags().contains(UiFlag::Pause));
		assert!(!player.flags().contains(UiFlag::Play));
		assert!(!player.is_playing());

		// Next attempt works.
		player.play(None);
		crate::tests::advance(&mut player, 500);
		assert!(player.flags().contains(UiFlag::Play));
		assert!(player.is_playing());
	}

	#[test]
	fn switch_track() {
		let mut player = crate::tests::loaded(100.0);
		player.play(None);
		crate::tests::advance(&mut player, 500);
		player.audio_mut().unwrap().current_time = 50.0;
		player.handle(ResourceEvent::TimeUpdate);
		player.toggle_mute();

		assert_eq!(player.bar().played(), 0.5);
		assert_eq!(player.view().bar(BarKind::AudioPlayed), "50%");
		assert_eq!(player.view().text(Label::CurrentTime), "00:50");

		let track = Track::new("b.mp3").with_title("B").with_duration(3600.0);
		player.play(Some(track.clone()));

		assert_eq!(player.track(), &track);
		assert_eq!(player.state().current_time, 0.0);
		assert_eq!(player.view().text(Label::Title), "B");
		assert_eq!(player.view().text(Label::CurrentTime), "00:00");
		assert_eq!(player.view().text(Label::Duration), "01:00:00");
		assert_eq!(player.bar().played(), 0.0);
		assert_eq!(player.view().bar(BarKind::AudioPlayed), "0%");

		let audio = player.audio().unwrap();
		assert_eq!(audio.src, "b.mp3");
		assert_eq!(audio.current_time, 0.0);
		assert!(audio.muted);

		// Swapping the source paused the resource, so play is re-issued.
		assert!(player.is_play_pending());
		crate::tests::advance(&mut player, 500);
		assert!(!player.audio().unwrap().paused);
		assert_eq!(player.audio().unwrap().play_count, 2);
		assert_eq!(player.platform().audio_count, 1);
	}

	#[test]
	fn track_without_source_is_ignored() {
		let mut player = crate::tests::init();
		player.play(Some(Track::new("").with_title("nope")));
		assert_eq!(player.track().src, "a.mp3");
		assert_eq!(player.view().text(Label::Title), "A");
		assert!(player.is_play_pending());
	}
}
