//---------------------------------------------------------------------------------------------------- use
#[allow(unused_imports)] // docs
use crate::Player;

//---------------------------------------------------------------------------------------------------- Track
/// A single playable piece of audio.
///
/// [`Track`]'s are supplied by the host and never fetched,
/// probed or validated by the [`Player`] beyond reading `src`.
///
/// `duration` is what the host claims the track lasts (in seconds).
/// It is only consulted before the audio resource exists, after
/// that the resource's own duration wins.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Track {
	/// URI of the decodable media.
	pub src: String,
	/// Main text line.
	pub title: String,
	/// Secondary text line (artist, show, etc).
	pub subtitle: String,
	/// Declared duration in seconds, if known up front.
	pub duration: Option<f64>,
}

//---------------------------------------------------------------------------------------------------- Track Impl
impl Track {
	/// An empty [`Track`], same as [`Track::default()`].
	pub const DEFAULT: Self = Self {
		src:      String::new(),
		title:    String::new(),
		subtitle: String::new(),
		duration: None,
	};

	#[must_use]
	/// Create a [`Track`] pointing at `src` with no other information.
	///
	/// ```rust
	/// # use shikwasa::track::*;
	/// let track = Track::new("a.mp3");
	/// assert_eq!(track.src, "a.mp3");
	/// assert_eq!(track.duration, None);
	/// ```
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			..Self::DEFAULT
		}
	}

	#[must_use]
	/// Set the title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	/// Set the subtitle.
	pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = subtitle.into();
		self
	}

	#[must_use]
	/// Set the declared duration (seconds).
	pub fn with_duration(mut self, duration: f64) -> Self {
		self.duration = Some(duration);
		self
	}

	#[must_use]
	/// Returns `true` if this track has something to play.
	pub fn has_src(&self) -> bool {
		!self.src.trim().is_empty()
	}

	#[must_use]
	/// The declared duration, or `0.0` if missing or not a usable number.
	///
	/// ```rust
	/// # use shikwasa::track::*;
	/// assert_eq!(Track::new("a").declared_duration(), 0.0);
	/// assert_eq!(Track::new("a").with_duration(f64::NAN).declared_duration(), 0.0);
	/// assert_eq!(Track::new("a").with_duration(-3.0).declared_duration(), 0.0);
	/// assert_eq!(Track::new("a").with_duration(12.5).declared_duration(), 12.5);
	/// ```
	pub fn declared_duration(&self) -> f64 {
		match self.duration {
			Some(d) if d.is_finite() && d > 0.0 => d,
			_ => 0.0,
		}
	}
}
