//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- Position
/// Which window edge a fixed player sticks to.
#[derive(Copy,Clone,Default,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Position {
	/// Top of the window
	Top,
	#[default]
	/// Bottom of the window
	Bottom,
}

//---------------------------------------------------------------------------------------------------- Fixed
/// Fixed (floating) layout settings.
#[derive(Copy,Clone,Default,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Fixed {
	/// Float the player over the page
	pub value: bool,
	/// Edge to float against
	pub position: Position,
}

impl Fixed {
	/// Not fixed, bottom edge.
	pub const DEFAULT: Self = Self {
		value: false,
		position: Position::Bottom,
	};
}
