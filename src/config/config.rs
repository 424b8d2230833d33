//---------------------------------------------------------------------------------------------------- use
use crate::{
	config::{Fixed,Preload},
	track::Track,
};

#[allow(unused_imports)] // docs
use crate::{Player, config::Settings};

//---------------------------------------------------------------------------------------------------- Config
/// Options given to [`Player::init`].
///
/// With the `serde` feature, this deserializes from the same
/// camelCase object the web widget accepts, missing keys default:
///
#[cfg_attr(feature = "serde", doc = "```rust")]
#[cfg_attr(not(feature = "serde"), doc = "```ignore")]
/// # use shikwasa::config::*;
/// let json = r#"{
///     "audio": [{ "src": "a.mp3", "title": "A", "duration": 100 }],
///     "autoPlay": true,
///     "speedOptions": [1, 1.5],
///     "fixed": { "value": true, "position": "top" }
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.auto_play);
/// assert!(!config.muted);
/// assert_eq!(config.preload, Preload::Metadata);
/// assert_eq!(config.fixed.unwrap().position, Position::Top);
/// ```
///
/// A [`Config`] is not validated, [`Settings::resolve`] does that.
#[derive(Clone,Debug,Default,PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Config {
	/// Tracks, the first one is loaded at construction
	pub audio: Vec<Track>,
	/// Start muted
	pub muted: bool,
	/// Start playing as soon as possible
	pub auto_play: bool,
	/// Resource preload mode
	pub preload: Preload,
	/// Choices the speed button cycles through,
	/// empty means [`crate::config::DEFAULT_SPEED_OPTIONS`]
	pub speed_options: Vec<f64>,
	/// Floating layout
	pub fixed: Option<Fixed>,
}

//---------------------------------------------------------------------------------------------------- Config Impl
impl Config {
	/// No tracks, everything else default.
	///
	/// ```rust
	/// # use shikwasa::config::*;
	/// assert_eq!(Config::DEFAULT, Config::default());
	/// ```
	pub const DEFAULT: Self = Self {
		audio:         Vec::new(),
		muted:         false,
		auto_play:     false,
		preload:       Preload::Metadata,
		speed_options: Vec::new(),
		fixed:         None,
	};

	#[must_use]
	/// [`Self::DEFAULT`] with a single track.
	pub fn with_track(track: Track) -> Self {
		Self {
			audio: vec![track],
			..Self::DEFAULT
		}
	}
}
