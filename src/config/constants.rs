//! Fixed values the [`crate::Player`] is built around.

//---------------------------------------------------------------------------------------------------- Use
use std::time::Duration;

//---------------------------------------------------------------------------------------------------- Constants
/// Class name of the element the player is mounted into.
pub const CONTAINER_CLASS: &str = "shk";

/// CSS custom property holding the theme color.
pub const THEME_PROPERTY: &str = "--primary-color";

/// Key code that toggles playback.
pub const KEY_SPACE: u32 = 32;

/// Delay between the UI showing "playing" and the
/// audio resource actually being told to play.
///
/// Some platforms race their autoplay policy against
/// a `play()` issued in the same turn as the gesture.
pub const PLAY_DELAY: Duration = Duration::from_millis(500);

/// Seconds skipped by the forward/backward buttons.
pub const SEEK_STEP: f64 = 10.0;

/// The speed every player starts at.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Speed choices used when none are configured.
pub const DEFAULT_SPEED_OPTIONS: [f64; 5] = [0.75, 1.0, 1.25, 1.5, 2.0];

/// How often the title carousel moves.
pub(crate) const CAROUSEL_INTERVAL: Duration = Duration::from_millis(50);
/// Pixels moved per carousel tick.
pub(crate) const CAROUSEL_STEP: f64 = 1.0;
/// Ticks the carousel rests at either end.
pub(crate) const CAROUSEL_HOLD: u32 = 40;

/// Some Android browsers report a duration of exactly 1
/// second before the real value arrives.
pub(crate) const DURATION_MISREPORT: f64 = 1.0;
