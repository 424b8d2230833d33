//---------------------------------------------------------------------------------------------------- use
use crate::error::ConfigError;

#[allow(unused_imports)] // docs
use crate::{Player, config::CONTAINER_CLASS};

//---------------------------------------------------------------------------------------------------- PlayerError
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Errors that stop a [`Player`] from being constructed.
///
/// These are the only errors `shikwasa` returns, once
/// [`Player::init`] succeeds nothing else is surfaced
/// to the caller.
pub enum PlayerError {
	#[error("invalid configuration: {0}")]
	/// The [`crate::config::Config`] could not be resolved
	Config(#[from] ConfigError),

	#[error("no container element with class `{0}` exists")]
	/// The host had no element to mount the player into, see [`CONTAINER_CLASS`]
	ContainerNotFound(&'static str),
}
