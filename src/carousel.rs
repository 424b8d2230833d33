//! Title carousel.
//!
//! A title wider than its container scrolls left until its
//! end is visible, rests, scrolls back, rests, and repeats.

//---------------------------------------------------------------------------------------------------- Use
use crate::config::{CAROUSEL_STEP,CAROUSEL_HOLD};

//---------------------------------------------------------------------------------------------------- Carousel
#[derive(Copy,Clone,Debug,PartialEq)]
pub(crate) struct Carousel {
	// Negative, how far left the title travels.
	distance: f64,
	offset: f64,
	// `true` while moving towards `distance`.
	outward: bool,
	hold: u32,
}

impl Carousel {
	/// Returns [`None`] if nothing overflows.
	pub(crate) fn new(overflow: f64) -> Option<Self> {
		if !(overflow.is_finite() && overflow > 0.0) {
			return None;
		}

		Some(Self {
			distance: -overflow,
			offset: 0.0,
			outward: true,
			hold: CAROUSEL_HOLD,
		})
	}

	#[cfg(test)]
	pub(crate) const fn offset(&self) -> f64 {
		self.offset
	}

	/// Advance one tick, returns the new offset if it moved.
	pub(crate) fn step(&mut self) -> Option<f64> {
		if self.hold > 0 {
			self.hold -= 1;
			return None;
		}

		let target = if self.outward { self.distance } else { 0.0 };
		self.offset = if self.outward {
			(self.offset - CAROUSEL_STEP).max(target)
		} else {
			(self.offset + CAROUSEL_STEP).min(target)
		};

		if self.offset == target {
			self.outward = !self.outward;
			self.hold = CAROUSEL_HOLD;
		}

		Some(self.offset)
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn no_overflow() {
		assert_eq!(Carousel::new(0.0), None);
		assert_eq!(Carousel::new(-3.0), None);
		assert_eq!(Carousel::new(f64::NAN), None);
	}

	#[test]
	fn round_trip() {
		let mut c = Carousel::new(2.5).unwrap();

		// Rest at the start.
		for _ in 0..CAROUSEL_HOLD {
			assert_eq!(c.step(), None);
		}

		assert_eq!(c.step(), Some(-1.0));
		assert_eq!(c.step(), Some(-2.0));
		assert_eq!(c.step(), Some(-2.5));

		// Rest at the end.
		for _ in 0..CAROUSEL_HOLD {
			assert_eq!(c.step(), None);
		}
		assert_eq!(c.offset(), -2.5);

		assert_eq!(c.step(), Some(-1.5));
		assert_eq!(c.step(), Some(-0.5));
		assert_eq!(c.step(), Some(0.0));
		assert_eq!(c.step(), None);
	}
}
