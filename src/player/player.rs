//---------------------------------------------------------------------------------------------------- Use
use crate::{
	bar::Bar,
	carousel::Carousel,
	config::Settings,
	format::second_to_time,
	platform::{Platform,View,Input,ResourceEvent,ListenerId,Label,BarKind,AudioResource},
	state::{Flags,UiFlag,PlaybackState},
	timer::{Timers,TimerId},
	track::Track,
};
use crossbeam::channel::Receiver;
use std::fmt;

//---------------------------------------------------------------------------------------------------- DragListeners
/// The process-wide listeners of one drag gesture.
///
/// Exists exactly while a gesture is in progress.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(super) struct DragListeners {
	pub(super) on_move: ListenerId,
	pub(super) on_end: ListenerId,
}

//---------------------------------------------------------------------------------------------------- Player
/// An audio player widget.
///
/// The [`Player`] is the single source of truth for whether audio
/// is playing, where playback is, and what the UI shows. It owns
/// the audio resource, the mounted [`View`], its timers and its
/// process-wide listeners.
///
/// Everything happens on the thread that owns the [`Player`].
/// The host forwards input ([`Player::click`], [`Player::key_up`],
/// [`Player::drag_start`], ...) and calls [`Player::tick`] from its
/// event loop, which fires due timers and handles audio resource events.
///
/// Playback methods never fail and never panic. After
/// [`Player::dispose`] (which also runs on [`Drop`]) every
/// method is a no-op.
pub struct Player<P: Platform> {
	pub(super) platform: P,
	pub(super) settings: Settings,
	// The currently selected track.
	pub(super) track: Track,
	pub(super) view: P::View,
	pub(super) input: Input,

	pub(super) flags: Flags,
	pub(super) bar: Bar,
	pub(super) state: PlaybackState,

	// Created on first playback request.
	pub(super) audio: Option<P::Audio>,
	pub(super) events: Option<Receiver<ResourceEvent>>,

	pub(super) timers: Timers,
	pub(super) deferred_play: Option<TimerId>,
	pub(super) carousel: Option<(TimerId, Carousel)>,

	pub(super) key_listener: Option<ListenerId>,
	pub(super) drag: Option<DragListeners>,

	pub(super) disposed: bool,
}

//---------------------------------------------------------------------------------------------------- Player Impl
impl<P: Platform> Player<P> {
	#[must_use]
	/// The host.
	pub const fn platform(&self) -> &P {
		&self.platform
	}

	#[must_use]
	/// The host, mutably.
	///
	/// This is meant for hosts that keep their own
	/// state (like a clock) inside their [`Platform`].
	pub fn platform_mut(&mut self) -> &mut P {
		&mut self.platform
	}

	#[must_use]
	/// The resolved settings.
	pub const fn settings(&self) -> &Settings {
		&self.settings
	}

	#[must_use]
	/// The currently selected track.
	pub const fn track(&self) -> &Track {
		&self.track
	}

	#[must_use]
	/// The mounted view.
	pub const fn view(&self) -> &P::View {
		&self.view
	}

	#[must_use]
	/// The audio resource, [`None`] until playback was first requested
	/// and again after [`Player::dispose`].
	pub const fn audio(&self) -> Option<&P::Audio> {
		self.audio.as_ref()
	}

	#[cfg(test)]
	pub(crate) fn audio_mut(&mut self) -> Option<&mut P::Audio> {
		self.audio.as_mut()
	}

	#[must_use]
	/// The input kind resolved at construction.
	pub const fn input(&self) -> Input {
		self.input
	}

	#[must_use]
	/// The UI flags currently shown.
	pub const fn flags(&self) -> Flags {
		self.flags
	}

	#[must_use]
	/// The progress bar fractions currently shown.
	pub const fn bar(&self) -> Bar {
		self.bar
	}

	#[must_use]
	/// Playback state.
	pub const fn state(&self) -> &PlaybackState {
		&self.state
	}

	#[must_use]
	/// Has [`Player::dispose`] been called?
	pub const fn is_disposed(&self) -> bool {
		self.disposed
	}

	#[must_use]
	/// Is a resource `play()` scheduled but not yet issued?
	pub fn is_play_pending(&self) -> bool {
		self.deferred_play.is_some_and(|id| self.timers.is_pending(id))
	}

	#[must_use]
	/// Is audio playing, or about to?
	///
	/// `true` from the moment [`Player::play`] flips the
	/// UI, even before the resource has actually started.
	pub fn is_playing(&self) -> bool {
		self.is_play_pending() || self.audio.as_ref().is_some_and(|a| !a.paused())
	}

	//---------------------------------------------------------------------------------------------------- UI helpers
	/// Set `flag` in both our set and the view, only writing on change.
	pub(super) fn set_flag(&mut self, flag: UiFlag, on: bool) {
		if self.flags.set(flag, on) {
			self.view.set_flag(flag, on);
		}
	}

	pub(super) fn set_ui_playing(&mut self) {
		self.set_flag(UiFlag::Play, true);
		self.set_flag(UiFlag::Pause, false);
	}

	pub(super) fn set_ui_paused(&mut self) {
		self.set_flag(UiFlag::Pause, true);
		self.set_flag(UiFlag::Play, false);
		self.set_flag(UiFlag::Loading, false);
	}

	pub(super) fn set_time_label(&mut self, time: f64) {
		self.view.set_text(Label::CurrentTime, &second_to_time(time));
	}

	pub(super) fn set_duration_label(&mut self, duration: f64) {
		self.view.set_text(Label::Duration, &second_to_time(duration));
	}

	pub(super) fn set_bar(&mut self, kind: BarKind, fraction: f64) {
		self.bar.set(&mut self.view, kind, fraction);
	}
}

//---------------------------------------------------------------------------------------------------- Trait Impl
impl<P: Platform> Drop for Player<P> {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl<P: Platform> fmt::Debug for Player<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Player")
			.field("track",         &self.track)
			.field("input",         &self.input)
			.field("flags",         &self.flags)
			.field("bar",           &self.bar)
			.field("state",         &self.state)
			.field("audio",         &self.audio.as_ref().map(|_| "Some(_)"))
			.field("deferred_play", &self.deferred_play)
			.field("carousel",      &self.carousel)
			.field("key_listener",  &self.key_listener)
			.field("drag",          &self.drag)
			.field("disposed",      &self.disposed)
			.finish()
	}
}
