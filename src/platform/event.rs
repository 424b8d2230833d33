//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

#[allow(unused_imports)] // docs
use crate::platform::{AudioResource,Platform};

//---------------------------------------------------------------------------------------------------- ResourceEvent
/// Lifecycle events an [`AudioResource`] reports.
///
/// The string forms are the HTML media event names.
///
/// ```rust
/// # use shikwasa::platform::*;
/// use std::str::FromStr;
/// assert_eq!(ResourceEvent::DurationChange.as_ref(), "durationchange");
/// assert_eq!(ResourceEvent::from_str("canplaythrough").unwrap(), ResourceEvent::CanPlayThrough);
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ResourceEvent {
	/// Playback started
	Play,
	/// Playback paused
	Pause,
	/// Playback reached the end
	Ended,
	/// The duration became known or changed
	DurationChange,
	/// More data was buffered
	Progress,
	/// The position moved
	TimeUpdate,
	/// Enough data to start playing
	CanPlay,
	/// Enough data to play to the end
	CanPlayThrough,
	/// Loading started
	LoadStart,
	/// Playback stalled waiting on data
	Waiting,
}

//---------------------------------------------------------------------------------------------------- ListenerId
/// Identifies a process-wide listener registered with [`Platform::listen`].
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
pub struct ListenerId(u64);

impl ListenerId {
	#[must_use]
	/// Wrap a platform specific id.
	pub const fn new(id: u64) -> Self {
		Self(id)
	}

	#[must_use]
	/// The platform specific id.
	pub const fn get(self) -> u64 {
		self.0
	}
}
