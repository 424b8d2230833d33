//! These are helper functions used for testing throughout the codebase.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	Player,
	config::Config,
	platform::dummy::DummyPlatform,
	track::Track,
};
use std::time::Duration;

//---------------------------------------------------------------------------------------------------- Test Init Helpers
/// A single 100 second track titled "A".
pub(crate) fn config() -> Config {
	Config::with_track(Track::new("a.mp3").with_title("A").with_duration(100.0))
}

/// Init a `Player` on `platform` with `config`.
pub(crate) fn init_with(platform: DummyPlatform, config: Config) -> Player<DummyPlatform> {
	Player::init(platform, config).unwrap()
}

/// Init a `Player` on a default `DummyPlatform` with [`config()`].
pub(crate) fn init() -> Player<DummyPlatform> {
	init_with(DummyPlatform::new(), config())
}

// Same as `init()` but the audio resource exists
// and reports `duration`. No events are handled yet.
pub(crate) fn loaded(duration: f64) -> Player<DummyPlatform> {
	let mut player = init();
	player.init_audio();
	player.audio_mut().unwrap().duration = duration;
	player
}

/// Move the dummy clock `millis` forward and `tick()`.
pub(crate) fn advance(player: &mut Player<DummyPlatform>, millis: u64) {
	player.platform_mut().advance(Duration::from_millis(millis));
	player.tick();
}
