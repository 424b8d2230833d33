//---------------------------------------------------------------------------------------------------- use
use crate::{
	config::{Config,Fixed,Preload,DEFAULT_SPEED,DEFAULT_SPEED_OPTIONS},
	error::ConfigError,
	track::Track,
};

//---------------------------------------------------------------------------------------------------- Settings
/// A fully resolved and validated [`Config`].
///
/// Created once per [`crate::Player`] and never mutated.
#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
	audio: Vec<Track>,
	muted: bool,
	auto_play: bool,
	preload: Preload,
	speed_options: Vec<f64>,
	fixed: Option<Fixed>,
}

//---------------------------------------------------------------------------------------------------- Settings Impl
impl Settings {
	/// Validate `config` and fill in defaults.
	///
	/// # Errors
	/// - `audio` is empty
	/// - a track has no `src`
	/// - a speed option is not a positive, finite number
	///
	/// ```rust
	/// # use shikwasa::config::*;
	/// # use shikwasa::track::*;
	/// # use shikwasa::error::*;
	/// assert_eq!(Settings::resolve(Config::DEFAULT), Err(ConfigError::EmptyAudio));
	///
	/// let settings = Settings::resolve(Config::with_track(Track::new("a.mp3"))).unwrap();
	/// assert_eq!(settings.speed_options(), DEFAULT_SPEED_OPTIONS);
	/// ```
	pub fn resolve(config: Config) -> Result<Self, ConfigError> {
		let Config {
			audio,
			muted,
			auto_play,
			preload,
			speed_options,
			fixed,
		} = config;

		if audio.is_empty() {
			return Err(ConfigError::EmptyAudio);
		}

		if let Some(index) = audio.iter().position(|t| !t.has_src()) {
			return Err(ConfigError::MissingSource { index });
		}

		let speed_options = if speed_options.is_empty() {
			DEFAULT_SPEED_OPTIONS.to_vec()
		} else {
			if let Some(bad) = speed_options.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
				return Err(ConfigError::InvalidSpeed(*bad));
			}
			speed_options
		};

		Ok(Self {
			audio,
			muted,
			auto_play,
			preload,
			speed_options,
			fixed,
		})
	}

	#[must_use]
	/// All configured tracks, never empty.
	pub fn audio(&self) -> &[Track] {
		&self.audio
	}

	#[must_use]
	/// The track loaded at construction.
	pub fn first_track(&self) -> &Track {
		// INVARIANT: `resolve()` rejects an empty list.
		&self.audio[0]
	}

	#[must_use]
	/// Start muted?
	pub const fn muted(&self) -> bool {
		self.muted
	}

	#[must_use]
	/// Start playing?
	pub const fn auto_play(&self) -> bool {
		self.auto_play
	}

	#[must_use]
	/// Resource preload mode.
	pub const fn preload(&self) -> Preload {
		self.preload
	}

	#[must_use]
	/// Speed choices, never empty.
	pub fn speed_options(&self) -> &[f64] {
		&self.speed_options
	}

	#[must_use]
	/// Floating layout, if any.
	pub const fn fixed(&self) -> Option<Fixed> {
		self.fixed
	}

	#[must_use]
	/// The speed a new player starts at.
	///
	/// [`DEFAULT_SPEED`] if it is one of the options, else the first option.
	///
	/// ```rust
	/// # use shikwasa::config::*;
	/// # use shikwasa::track::*;
	/// let mut config = Config::with_track(Track::new("a.mp3"));
	/// config.speed_options = vec![1.5, 2.0];
	/// assert_eq!(Settings::resolve(config).unwrap().initial_speed(), 1.5);
	/// ```
	pub fn initial_speed(&self) -> f64 {
		if self.speed_options.contains(&DEFAULT_SPEED) {
			DEFAULT_SPEED
		} else {
			self.speed_options[0]
		}
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Position;
	use pretty_assertions::assert_eq;

	fn config() -> Config {
		Config::with_track(Track::new("a.mp3").with_duration(100.0))
	}

	#[test]
	fn empty_audio() {
		assert_eq!(Settings::resolve(Config::DEFAULT), Err(ConfigError::EmptyAudio));
	}

	#[test]
	fn missing_source() {
		let mut config = config();
		config.audio.push(Track::new(""));
		assert_eq!(Settings::resolve(config), Err(ConfigError::MissingSource { index: 1 }));
	}

	#[test]
	fn invalid_speed() {
		for bad in [0.0, -1.0, f64::INFINITY] {
			let mut config = config();
			config.speed_options = vec![1.0, bad];
			assert_eq!(Settings::resolve(config), Err(ConfigError::InvalidSpeed(bad)));
		}

		let mut config = config();
		config.speed_options = vec![f64::NAN];
		assert!(matches!(Settings::resolve(config), Err(ConfigError::InvalidSpeed(_))));
	}

	#[test]
	fn defaults() {
		let settings = Settings::resolve(config()).unwrap();
		assert_eq!(settings.audio().len(), 1);
		assert_eq!(settings.first_track().src, "a.mp3");
		assert!(!settings.muted());
		assert!(!settings.auto_play());
		assert_eq!(settings.preload(), Preload::Metadata);
		assert_eq!(settings.speed_options(), DEFAULT_SPEED_OPTIONS);
		assert_eq!(settings.initial_speed(), DEFAULT_SPEED);
		assert_eq!(settings.fixed(), None);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn from_json() {
		let json = r#"{
			"audio": [
				{ "src": "a.mp3", "title": "A", "subtitle": "Show", "duration": 100 },
				{ "src": "b.mp3" }
			],
			"muted": true,
			"preload": "none",
			"speedOptions": [0.5, 1, 2],
			"fixed": { "value": true, "position": "top" }
		}"#;

		let config: Config = serde_json::from_str(json).unwrap();
		let settings = Settings::resolve(config).unwrap();
		assert_eq!(settings.audio().len(), 2);
		assert_eq!(settings.first_track().subtitle, "Show");
		assert_eq!(settings.first_track().duration, Some(100.0));
		assert!(settings.muted());
		assert!(!settings.auto_play());
		assert_eq!(settings.preload(), Preload::None);
		assert_eq!(settings.speed_options(), [0.5, 1.0, 2.0]);
		assert_eq!(settings.fixed(), Some(Fixed { value: true, position: Position::Top }));
	}
}
