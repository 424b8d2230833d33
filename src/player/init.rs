//! Construction, and lazy construction of the audio resource.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	bar::Bar,
	carousel::Carousel,
	config::{Config,Settings,Position,CONTAINER_CLASS,CAROUSEL_INTERVAL},
	error::PlayerError,
	format::speed_label,
	macros::{info2,debug2,trace2},
	platform::{Platform,View,AudioResource,Label},
	player::Player,
	state::{Flags,UiFlag,PlaybackState},
	timer::{Timers,TimerKind},
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	#[cold]
	#[inline(never)]
	/// Resolve `config`, mount the view and wire everything up.
	///
	/// The audio resource is _not_ created here, it is created the
	/// first time playback is requested. The exception is
	/// [`Config::auto_play`], which requests playback immediately.
	///
	/// This registers one process-wide `keyup` listener
	/// (space toggles playback) that lives until [`Player::dispose`].
	///
	/// # Errors
	/// - the config is invalid, see [`Settings::resolve`]
	/// - the platform has no container to mount into
	pub fn init(mut platform: P, config: Config) -> Result<Self, PlayerError> {
		let settings = Settings::resolve(config)?;
		let track = settings.first_track().clone();

		let Some(view) = platform.mount(CONTAINER_CLASS, &track) else {
			return Err(PlayerError::ContainerNotFound(CONTAINER_CLASS));
		};

		// Resolved once, the drag gesture never re-queries it.
		let input = platform.input();
		let state = PlaybackState::new(settings.muted(), settings.initial_speed());

		let mut this = Self {
			platform,
			settings,
			track,
			view,
			input,
			flags: Flags::EMPTY,
			bar: Bar::EMPTY,
			state,
			audio: None,
			events: None,
			timers: Timers::new(),
			deferred_play: None,
			carousel: None,
			key_listener: None,
			drag: None,
			disposed: false,
		};

		this.init_theme();
		this.init_options();
		this.init_labels();
		this.start_carousel();
		this.init_key_events();

		info2!("player: init ({}, input: {})", this.track.src, this.input);

		if this.settings.auto_play() {
			this.play(None);
		}

		Ok(this)
	}

	fn init_theme(&mut self) {
		let Some(color) = self.platform.theme_color() else {
			return;
		};

		let color = color.trim();
		if !color.is_empty() {
			self.view.set_shadow(&format!("0px 0px 14px 6px {color}20"));
		}
	}

	fn init_options(&mut self) {
		if let Some(fixed) = self.settings.fixed() {
			if fixed.value {
				self.set_flag(UiFlag::Fixed, true);
			}
			if fixed.position == Position::Top {
				self.set_flag(UiFlag::Top, true);
			}
		}

		if self.state.muted {
			self.set_flag(UiFlag::Mute, true);
		}

		if self.settings.auto_play() {
			self.set_flag(UiFlag::Play, true);
		} else {
			self.set_flag(UiFlag::Pause, true);
		}
	}

	fn init_labels(&mut self) {
		self.view.set_text(Label::Speed, &speed_label(self.state.current_speed));
		self.set_time_label(0.0);
		self.set_duration_label(self.track.declared_duration());
	}

	fn init_key_events(&mut self) {
		self.key_listener = Some(self.platform.listen("keyup"));
	}

	//---------------------------------------------------------------------------------------------------- Carousel
	/// (Re)start the title carousel if the current title overflows.
	pub(super) fn start_carousel(&mut self) {
		self.stop_carousel();

		if let Some(carousel) = Carousel::new(self.view.title_overflow()) {
			let now = self.platform.now();
			let id = self.timers.interval(TimerKind::Carousel, now, CAROUSEL_INTERVAL);
			self.carousel = Some((id, carousel));
			trace2!("player: carousel started");
		}
	}

	pub(super) fn stop_carousel(&mut self) {
		if let Some((id, _)) = self.carousel.take() {
			self.timers.cancel(id);
		}
	}

	//---------------------------------------------------------------------------------------------------- Audio
	/// Create the audio resource, if it doesn't exist yet.
	pub(crate) fn init_audio(&mut self) {
		if self.state.inited || self.disposed {
			return;
		}

		let (send, recv) = crossbeam::channel::unbounded();
		self.audio = Some(self.platform.create_audio(send));
		self.events = Some(recv);
		self.state.inited = true;

		let src = self.track.src.clone();
		self.update_audio(&src);

		debug2!("player: audio resource created");
	}

	/// Point the resource at `src` and re-apply every setting to it.
	pub(super) fn update_audio(&mut self, src: &str) {
		let Some(audio) = self.audio.as_mut() else {
			return;
		};

		audio.set_src(src);
		audio.set_preload(self.settings.preload());
		audio.set_autoplay(self.settings.auto_play());
		audio.set_muted(self.state.muted);
		audio.set_current_time(self.state.current_time);
		audio.set_playback_rate(self.state.current_speed);

		trace2!("player: audio source -> {src}");
	}
}
