//! Input routing, the event loop tick and audio resource events.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	bar::fraction,
	config::{KEY_SPACE,DURATION_MISREPORT},
	macros::trace2,
	platform::{Platform,View,AudioResource,ResourceEvent,Button,BarKind},
	player::Player,
	state::UiFlag,
	timer::{TimerId,TimerKind},
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// A control in the view was clicked.
	pub fn click(&mut self, button: Button) {
		match button {
			Button::Play     => self.toggle(),
			Button::Mute     => self.toggle_mute(),
			Button::Forward  => self.forward(),
			Button::Backward => self.backward(),
			Button::Speed    => self.cycle_speed(),
		}
	}

	/// A key was released anywhere in the process.
	///
	/// Space ([`KEY_SPACE`]) toggles playback.
	pub fn key_up(&mut self, key_code: u32) {
		if self.key_listener.is_none() {
			return;
		}

		if key_code == KEY_SPACE {
			self.toggle();
		}
	}

	/// Fire due timers and handle pending audio resource events.
	///
	/// Hosts should call this regularly (every animation
	/// frame, or whenever their event loop wakes up).
	pub fn tick(&mut self) {
		if self.disposed {
			return;
		}

		let now = self.platform.now();
		for (id, kind) in self.timers.expire(now) {
			match kind {
				TimerKind::DeferredPlay => {
					if self.deferred_play == Some(id) {
						self.fire_deferred_play();
					}
				},
				TimerKind::Carousel => self.step_carousel(id),
			}
		}

		while let Some(event) = self.events.as_ref().and_then(|r| r.try_recv().ok()) {
			self.handle(event);
		}
	}

	fn step_carousel(&mut self, id: TimerId) {
		if let Some((carousel_id, carousel)) = self.carousel.as_mut() {
			if *carousel_id == id {
				if let Some(offset) = carousel.step() {
					self.view.set_title_offset(offset);
				}
			}
		}
	}

	/// React to a lifecycle event of the audio resource.
	///
	/// Events normally arrive through the channel given to
	/// [`Platform::create_audio`] and are handled in [`Player::tick`],
	/// hosts that dispatch events themselves can call this directly.
	///
	/// Ignored before the resource exists and after [`Player::dispose`].
	pub fn handle(&mut self, event: ResourceEvent) {
		if self.disposed || self.audio.is_none() {
			return;
		}

		trace2!("player: event {event}");

		match event {
			ResourceEvent::Play => {
				if self.flags.contains(UiFlag::Pause) {
					self.set_ui_playing();
				}
			},
			ResourceEvent::Pause => {
				// A pending play means we still intend to play.
				if self.flags.contains(UiFlag::Play) && self.deferred_play.is_none() {
					self.set_ui_paused();
				}
			},
			ResourceEvent::Ended => {
				self.cancel_deferred_play();
				self.set_ui_paused();
				self.seek(0.0);
			},
			ResourceEvent::DurationChange => self.on_duration_change(),
			ResourceEvent::Progress       => self.on_progress(),
			ResourceEvent::TimeUpdate     => self.on_time_update(),
			ResourceEvent::CanPlay | ResourceEvent::CanPlayThrough => {
				self.set_flag(UiFlag::Loading, false);
			},
			ResourceEvent::LoadStart | ResourceEvent::Waiting => {
				self.set_flag(UiFlag::Loading, true);
			},
		}
	}

	fn on_duration_change(&mut self) {
		let duration = self.duration();
		if duration != DURATION_MISREPORT {
			self.set_duration_label(duration);
		}
	}

	fn on_progress(&mut self) {
		let Some(end) = self.audio.as_ref().and_then(AudioResource::buffered_end) else {
			return;
		};

		let loaded = fraction(end, self.duration());
		self.set_bar(BarKind::AudioLoaded, loaded);
	}

	fn on_time_update(&mut self) {
		if self.state.dragging {
			return;
		}

		let Some(time) = self.audio.as_ref().map(AudioResource::current_time) else {
			return;
		};

		if !time.is_finite() || time.floor() == self.state.current_time.floor() {
			return;
		}

		self.set_time_label(time);
		self.state.current_time = time;
		self.set_bar(BarKind::AudioPlayed, fraction(time, self.duration()));
	}
}
