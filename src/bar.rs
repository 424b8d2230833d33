//! Progress bar model.
//!
//! The bar has two independent fills, how much has been
//! played and how much has been buffered. Each is a fraction
//! in `0.0..=1.0` mapped to a width style.

//---------------------------------------------------------------------------------------------------- Use
use crate::platform::{BarKind,View};

//---------------------------------------------------------------------------------------------------- Bar
/// The last fraction written for each [`BarKind`].
///
/// Keeping these only serves to skip writes that would not
/// change anything, clamping is the caller's job.
#[derive(Copy,Clone,Debug,Default,PartialEq)]
pub struct Bar {
	played: f64,
	loaded: f64,
}

impl Bar {
	/// Both fills empty.
	pub const EMPTY: Self = Self {
		played: 0.0,
		loaded: 0.0,
	};

	#[must_use]
	/// The played fraction.
	pub const fn played(&self) -> f64 {
		self.played
	}

	#[must_use]
	/// The buffered fraction.
	pub const fn loaded(&self) -> f64 {
		self.loaded
	}

	#[must_use]
	/// The last fraction written for `kind`.
	pub const fn get(&self, kind: BarKind) -> f64 {
		match kind {
			BarKind::AudioPlayed => self.played,
			BarKind::AudioLoaded => self.loaded,
		}
	}

	/// Set the fill of `kind` to `fraction`, writing to `view` if it changed.
	pub(crate) fn set<V: View>(&mut self, view: &mut V, kind: BarKind, fraction: f64) {
		let slot = match kind {
			BarKind::AudioPlayed => &mut self.played,
			BarKind::AudioLoaded => &mut self.loaded,
		};

		if *slot == fraction {
			return;
		}

		*slot = fraction;
		view.set_bar_width(kind, &width(fraction));
	}
}

//---------------------------------------------------------------------------------------------------- Free
#[must_use]
/// The width style for `fraction`.
///
/// ```rust
/// # use shikwasa::bar::*;
/// assert_eq!(width(0.0), "0%");
/// assert_eq!(width(0.5), "50%");
/// assert_eq!(width(1.0), "100%");
/// ```
pub fn width(fraction: f64) -> String {
	format!("{}%", fraction * 100.0)
}

/// `part / whole`, or `0.0` when `whole` is not positive.
pub(crate) fn fraction(part: f64, whole: f64) -> f64 {
	if whole > 0.0 && part.is_finite() {
		(part / whole).clamp(0.0, 1.0)
	} else {
		0.0
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::platform::dummy::DummyView;
	use crate::platform::BarRect;
	use pretty_assertions::assert_eq;

	fn view() -> DummyView {
		DummyView::new(BarRect::new(0.0, 100.0), 0.0)
	}

	#[test]
	fn kinds_are_independent() {
		let mut bar = Bar::EMPTY;
		let mut view = view();

		bar.set(&mut view, BarKind::AudioPlayed, 0.25);
		bar.set(&mut view, BarKind::AudioLoaded, 0.75);

		assert_eq!(bar.played(), 0.25);
		assert_eq!(bar.loaded(), 0.75);
		assert_eq!(view.bar(BarKind::AudioPlayed), "25%");
		assert_eq!(view.bar(BarKind::AudioLoaded), "75%");
	}

	#[test]
	fn skips_redundant_writes() {
		let mut bar = Bar::EMPTY;
		let mut view = view();

		bar.set(&mut view, BarKind::AudioPlayed, 0.0);
		assert_eq!(view.writes, 0);

		bar.set(&mut view, BarKind::AudioPlayed, 0.5);
		bar.set(&mut view, BarKind::AudioPlayed, 0.5);
		assert_eq!(view.writes, 1);
	}

	#[test]
	fn fraction_guards() {
		assert_eq!(fraction(50.0, 100.0), 0.5);
		assert_eq!(fraction(50.0, 0.0), 0.0);
		assert_eq!(fraction(150.0, 100.0), 1.0);
		assert_eq!(fraction(f64::NAN, 100.0), 0.0);
		assert_eq!(fraction(1.0, f64::NAN), 0.0);
	}
}
