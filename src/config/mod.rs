//! Construction configuration for the [`Player`].

#[allow(unused_imports)] // docs
use crate::Player;

mod config;
pub use config::Config;

mod settings;
pub use settings::Settings;

mod layout;
pub use layout::{Fixed,Position};

mod preload;
pub use preload::Preload;

mod constants;
pub use constants::{
	CONTAINER_CLASS,
	THEME_PROPERTY,
	KEY_SPACE,
	PLAY_DELAY,
	SEEK_STEP,
	DEFAULT_SPEED,
	DEFAULT_SPEED_OPTIONS,
};
pub(crate) use constants::{
	CAROUSEL_INTERVAL,
	CAROUSEL_STEP,
	CAROUSEL_HOLD,
	DURATION_MISREPORT,
};
