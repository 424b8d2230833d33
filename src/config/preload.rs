//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- Preload
/// How eagerly the audio resource should fetch its source.
///
/// The string forms match the HTML `preload` attribute.
///
/// ```rust
/// # use shikwasa::config::*;
/// use std::str::FromStr;
/// assert_eq!(Preload::Metadata.as_ref(), "metadata");
/// assert_eq!(Preload::from_str("auto").unwrap(), Preload::Auto);
/// assert_eq!(Preload::default(), Preload::Metadata);
/// ```
#[derive(Copy,Clone,Default,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Preload {
	/// Fetch nothing until playback starts
	None,
	#[default]
	/// Fetch only enough to know the duration
	Metadata,
	/// Fetch the whole thing if the platform agrees
	Auto,
}
