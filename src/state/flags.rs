//! UI display flags.

//---------------------------------------------------------------------------------------------------- Use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
	IntoEnumIterator,
};

//---------------------------------------------------------------------------------------------------- UiFlag
/// A named display state, realized by the view
/// as a class toggled on the player's root element.
///
/// The string form is the class name.
///
/// ```rust
/// # use shikwasa::state::*;
/// assert_eq!(UiFlag::Seeking.as_ref(), "Seeking");
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiFlag {
	/// Audio is (or is about to be) playing
	Play,
	/// Audio is paused
	Pause,
	/// Audio is waiting on data
	Loading,
	/// Audio is muted
	Mute,
	/// A drag gesture on the seek bar is in progress
	Seeking,
	/// Player floats over the page
	Fixed,
	/// Floating player sticks to the top edge
	Top,
}

impl UiFlag {
	const fn bit(self) -> u8 {
		1 << (self as u8)
	}
}

//---------------------------------------------------------------------------------------------------- Flags
/// The set of [`UiFlag`]'s currently shown.
///
/// The [`crate::Player`] keeps `Play` and `Pause` mutually exclusive,
/// exactly one of them is always set.
///
/// ```rust
/// # use shikwasa::state::*;
/// let mut flags = Flags::EMPTY;
/// assert!(flags.insert(UiFlag::Pause));
/// assert!(!flags.insert(UiFlag::Pause));
/// assert!(flags.contains(UiFlag::Pause));
/// assert!(flags.remove(UiFlag::Pause));
/// assert!(flags.is_empty());
/// ```
#[derive(Copy,Clone,Default,PartialEq,Eq,Hash)]
pub struct Flags(u8);

impl Flags {
	/// No flags set.
	pub const EMPTY: Self = Self(0);

	#[must_use]
	/// Is `flag` set?
	pub const fn contains(self, flag: UiFlag) -> bool {
		self.0 & flag.bit() != 0
	}

	#[must_use]
	/// Are no flags set?
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Set `flag`, returns `true` if it wasn't already set.
	pub fn insert(&mut self, flag: UiFlag) -> bool {
		let changed = !self.contains(flag);
		self.0 |= flag.bit();
		changed
	}

	/// Unset `flag`, returns `true` if it was set.
	pub fn remove(&mut self, flag: UiFlag) -> bool {
		let changed = self.contains(flag);
		self.0 &= !flag.bit();
		changed
	}

	/// Set or unset `flag`, returns `true` if anything changed.
	pub fn set(&mut self, flag: UiFlag, on: bool) -> bool {
		if on {
			self.insert(flag)
		} else {
			self.remove(flag)
		}
	}

	/// Iterate over the set flags, in declaration order.
	pub fn iter(self) -> impl Iterator<Item = UiFlag> {
		UiFlag::iter().filter(move |f| self.contains(*f))
	}
}

impl std::fmt::Debug for Flags {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl FromIterator<UiFlag> for Flags {
	fn from_iter<I: IntoIterator<Item = UiFlag>>(iter: I) -> Self {
		let mut flags = Self::EMPTY;
		for flag in iter {
			flags.insert(flag);
		}
		flags
	}
}
