//! Dummy in-memory platform.
//!
//! This implements [`Platform`], [`AudioResource`] and [`View`]
//! with plain structs that record everything done to them.
//!
//! Functionally, it should behave like a real host, except
//! nothing is drawn and no audio is played. Time only moves
//! when [`DummyPlatform::advance`] is called.
//!
//! This is used for testing purposes.

//----------------------------------------------------------------------------------------------- use
use crate::{
	config::Preload,
	error::AudioError,
	platform::{
		Platform,AudioResource,View,Input,
		ResourceEvent,ListenerId,Label,BarKind,BarRect,
	},
	state::{Flags,UiFlag},
	track::Track,
};
use crossbeam::channel::Sender;
use std::{
	collections::BTreeMap,
	time::Duration,
};

//----------------------------------------------------------------------------------------------- DummyPlatform
/// An in-memory [`Platform`].
///
/// All fields are public so tests can set up and inspect the host.
#[derive(Clone,Debug)]
pub struct DummyPlatform {
	/// The current time, see [`Self::advance`].
	pub now: Duration,
	/// Input kind reported by [`Platform::input`].
	pub input: Input,
	/// Theme color reported by [`Platform::theme_color`].
	pub theme_color: Option<String>,
	/// Does the container element exist?
	pub container: bool,
	/// Geometry given to mounted views.
	pub bar_rect: BarRect,
	/// Title overflow given to mounted views.
	pub title_overflow: f64,
	/// Currently active process-wide listeners.
	pub listeners: BTreeMap<ListenerId, &'static str>,
	/// How many listeners were ever registered.
	pub listen_count: u64,
	/// How many audio resources were created.
	pub audio_count: usize,
}

impl DummyPlatform {
	#[must_use]
	/// A host with a container, a `0..100` pixel bar and a short title.
	pub fn new() -> Self {
		Self {
			now: Duration::ZERO,
			input: Input::Mouse,
			theme_color: None,
			container: true,
			bar_rect: BarRect::new(0.0, 100.0),
			title_overflow: 0.0,
			listeners: BTreeMap::new(),
			listen_count: 0,
			audio_count: 0,
		}
	}

	/// Move the clock forward.
	pub fn advance(&mut self, by: Duration) {
		self.now += by;
	}

	#[must_use]
	/// Is a listener for `event` active?
	pub fn is_listening(&self, event: &str) -> bool {
		self.listeners.values().any(|e| *e == event)
	}
}

impl Default for DummyPlatform {
	fn default() -> Self {
		Self::new()
	}
}

impl Platform for DummyPlatform {
	type Audio = DummyAudio;
	type View = DummyView;

	fn mount(&mut self, _class: &str, track: &Track) -> Option<Self::View> {
		if !self.container {
			return None;
		}

		let mut view = DummyView::new(self.bar_rect, self.title_overflow);
		view.update(track);
		Some(view)
	}

	fn theme_color(&self) -> Option<String> {
		self.theme_color.clone()
	}

	fn create_audio(&mut self, events: Sender<ResourceEvent>) -> Self::Audio {
		self.audio_count += 1;
		DummyAudio::new(events)
	}

	fn listen(&mut self, event: &'static str) -> ListenerId {
		self.listen_count += 1;
		let id = ListenerId::new(self.listen_count);
		self.listeners.insert(id, event);
		id
	}

	fn unlisten(&mut self, id: ListenerId) {
		assert!(self.listeners.remove(&id).is_some(), "listener {id:?} removed twice");
	}

	fn now(&self) -> Duration {
		self.now
	}

	fn input(&self) -> Input {
		self.input
	}
}

//----------------------------------------------------------------------------------------------- DummyAudio
/// An in-memory [`AudioResource`].
///
/// Like a real audio element it reports `play`, `pause`
/// and `loadstart` on its event channel, every other event
/// must be sent by the test with [`DummyAudio::emit`].
#[derive(Debug)]
pub struct DummyAudio {
	/// Current source.
	pub src: String,
	/// Current preload mode.
	pub preload: Preload,
	/// Current autoplay setting.
	pub autoplay: bool,
	/// Is it muted?
	pub muted: bool,
	/// Current playback rate.
	pub playback_rate: f64,
	/// Current position.
	pub current_time: f64,
	/// Reported duration, [`f64::NAN`] until set.
	pub duration: f64,
	/// Reported buffered end.
	pub buffered_end: Option<f64>,
	/// Is it paused?
	pub paused: bool,
	/// If set, the next [`AudioResource::play`] fails with this.
	pub reject: Option<AudioError>,
	/// How many times [`AudioResource::play`] was called.
	pub play_count: usize,
	/// How many times [`AudioResource::pause`] was called.
	pub pause_count: usize,
	/// How many times [`AudioResource::load`] was called.
	pub load_count: usize,
	events: Sender<ResourceEvent>,
}

impl DummyAudio {
	fn new(events: Sender<ResourceEvent>) -> Self {
		Self {
			src: String::new(),
			preload: Preload::Auto,
			autoplay: false,
			muted: false,
			playback_rate: 1.0,
			current_time: 0.0,
			duration: f64::NAN,
			buffered_end: None,
			paused: true,
			reject: None,
			play_count: 0,
			pause_count: 0,
			load_count: 0,
			events,
		}
	}

	/// Report `event` to the player.
	///
	/// Events sent after the player dropped its receiver are discarded.
	pub fn emit(&self, event: ResourceEvent) {
		let _ = self.events.send(event);
	}
}

impl AudioResource for DummyAudio {
	fn set_src(&mut self, src: &str) {
		src.clone_into(&mut self.src);
		self.paused = true;
		self.current_time = 0.0;
		self.duration = f64::NAN;
		self.buffered_end = None;
		if !src.is_empty() {
			self.emit(ResourceEvent::LoadStart);
		}
	}

	fn set_preload(&mut self, preload: Preload) {
		self.preload = preload;
	}

	fn set_autoplay(&mut self, autoplay: bool) {
		self.autoplay = autoplay;
	}

	fn set_muted(&mut self, muted: bool) {
		self.muted = muted;
	}

	fn set_playback_rate(&mut self, rate: f64) {
		self.playback_rate = rate;
	}

	fn current_time(&self) -> f64 {
		self.current_time
	}

	fn set_current_time(&mut self, time: f64) {
		self.current_time = time;
	}

	fn duration(&self) -> f64 {
		self.duration
	}

	fn buffered_end(&self) -> Option<f64> {
		self.buffered_end
	}

	fn paused(&self) -> bool {
		self.paused
	}

	fn play(&mut self) -> Result<(), AudioError> {
		self.play_count += 1;
		if let Some(error) = self.reject.take() {
			return Err(error);
		}
		if self.paused {
			self.paused = false;
			self.emit(ResourceEvent::Play);
		}
		Ok(())
	}

	fn pause(&mut self) {
		self.pause_count += 1;
		if !self.paused {
			self.paused = true;
			self.emit(ResourceEvent::Pause);
		}
	}

	fn load(&mut self) {
		self.load_count += 1;
	}
}

//----------------------------------------------------------------------------------------------- DummyView
/// An in-memory [`View`].
#[derive(Clone,Debug,PartialEq)]
pub struct DummyView {
	/// Classes on the root element.
	pub flags: Flags,
	/// Text of every label written so far.
	pub texts: BTreeMap<Label, String>,
	/// Width style of every bar fill written so far.
	pub bars: BTreeMap<BarKind, String>,
	/// Bar wrapper geometry.
	pub bar_rect: BarRect,
	/// Title overflow.
	pub title_overflow: f64,
	/// Current title translation.
	pub title_offset: f64,
	/// Box shadow, if set.
	pub shadow: Option<String>,
	/// Total number of writes of any kind.
	pub writes: usize,
}

impl DummyView {
	#[must_use]
	/// A blank view with the given geometry.
	pub fn new(bar_rect: BarRect, title_overflow: f64) -> Self {
		Self {
			flags: Flags::EMPTY,
			texts: BTreeMap::new(),
			bars: BTreeMap::new(),
			bar_rect,
			title_overflow,
			title_offset: 0.0,
			shadow: None,
			writes: 0,
		}
	}

	#[must_use]
	/// The text of `label`, `""` if never written.
	pub fn text(&self, label: Label) -> &str {
		self.texts.get(&label).map_or("", String::as_str)
	}

	#[must_use]
	/// The width style of `kind`, `""` if never written.
	pub fn bar(&self, kind: BarKind) -> &str {
		self.bars.get(&kind).map_or("", String::as_str)
	}
}

impl View for DummyView {
	fn set_flag(&mut self, flag: UiFlag, on: bool) {
		self.writes += 1;
		self.flags.set(flag, on);
	}

	fn set_text(&mut self, label: Label, text: &str) {
		self.writes += 1;
		self.texts.insert(label, text.to_owned());
	}

	fn set_bar_width(&mut self, kind: BarKind, width: &str) {
		self.writes += 1;
		self.bars.insert(kind, width.to_owned());
	}

	fn bar_rect(&self) -> BarRect {
		self.bar_rect
	}

	fn title_overflow(&self) -> f64 {
		self.title_overflow
	}

	fn set_title_offset(&mut self, offset: f64) {
		self.writes += 1;
		self.title_offset = offset;
	}

	fn set_shadow(&mut self, shadow: &str) {
		self.writes += 1;
		self.shadow = Some(shadow.to_owned());
	}

	fn update(&mut self, track: &Track) {
		self.writes += 1;
		self.texts.insert(Label::Title, track.title.clone());
		self.texts.insert(Label::Subtitle, track.subtitle.clone());
		self.title_offset = 0.0;
	}
}
