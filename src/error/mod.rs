//! General errors that can occur.

mod config;
pub use config::ConfigError;

mod audio;
pub use audio::AudioError;

mod error;
pub use error::PlayerError;
