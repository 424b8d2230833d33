//---------------------------------------------------------------------------------------------------- use
use crate::{
	platform::BarRect,
	state::UiFlag,
	track::Track,
};
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- Label
/// Text nodes in the player markup.
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Label {
	/// Position label
	CurrentTime,
	/// Duration label
	Duration,
	/// Speed button text
	Speed,
	/// Track title
	Title,
	/// Track subtitle
	Subtitle,
}

//---------------------------------------------------------------------------------------------------- Button
/// Clickable controls in the player markup.
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Button {
	/// Play/pause
	Play,
	/// Mute/unmute
	Mute,
	/// Skip forward
	Forward,
	/// Skip backward
	Backward,
	/// Cycle playback speed
	Speed,
}

//---------------------------------------------------------------------------------------------------- BarKind
/// The two fills of the progress bar.
///
/// ```rust
/// # use shikwasa::platform::*;
/// assert_eq!(BarKind::AudioPlayed.as_ref(), "audioPlayed");
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum BarKind {
	/// How much has been played
	AudioPlayed,
	/// How much has been buffered
	AudioLoaded,
}

//---------------------------------------------------------------------------------------------------- View
/// Handles to the player markup after it has been mounted.
///
/// Every method is a presentational write or a layout read,
/// none of them carry logic.
pub trait View {
	/// Add (`on == true`) or remove a class on the root element.
	fn set_flag(&mut self, flag: UiFlag, on: bool);

	/// Replace the text of `label`.
	fn set_text(&mut self, label: Label, text: &str);

	/// Set the inline width style (e.g. `"50%"`) of one bar fill.
	fn set_bar_width(&mut self, kind: BarKind, width: &str);

	/// The bar wrapper's current horizontal geometry.
	fn bar_rect(&self) -> BarRect;

	/// How many pixels wider the title is than its container,
	/// `<= 0.0` if it fits.
	fn title_overflow(&self) -> f64;

	/// Horizontally translate the title by `offset` pixels.
	fn set_title_offset(&mut self, offset: f64);

	/// Set the root element's box shadow.
	fn set_shadow(&mut self, shadow: &str);

	/// Re-render track dependent text for `track`.
	fn update(&mut self, track: &Track);
}
