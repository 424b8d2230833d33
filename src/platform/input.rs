//! Pointer input normalization.

//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- Native
cfg_if::cfg_if! {
	if #[cfg(any(target_os = "android", target_os = "ios"))] {
		const NATIVE: Input = Input::Touch;
	} else {
		const NATIVE: Input = Input::Mouse;
	}
}

//---------------------------------------------------------------------------------------------------- Input
/// The kind of pointer a platform produces.
///
/// This decides which event names the drag gesture listens
/// to. It is resolved once per [`crate::Player`] and never re-queried.
///
/// ```rust
/// # use shikwasa::platform::*;
/// assert_eq!(Input::Touch.drag_move(), "touchmove");
/// assert_eq!(Input::Mouse.drag_end(), "mouseup");
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[derive(AsRefStr,Display,EnumString,IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Input {
	/// Mouse (or pen) events
	Mouse,
	/// Touch events
	Touch,
}

impl Input {
	#[must_use]
	/// The input kind of the compile target.
	///
	/// Touch on `android`/`ios`, mouse everywhere else.
	pub const fn native() -> Self {
		NATIVE
	}

	#[must_use]
	/// Guess the input kind from a browser user agent.
	///
	/// ```rust
	/// # use shikwasa::platform::*;
	/// assert_eq!(Input::from_user_agent("Mozilla/5.0 (iPhone) Mobile/15E148"), Input::Touch);
	/// assert_eq!(Input::from_user_agent("Mozilla/5.0 (X11; Linux x86_64)"), Input::Mouse);
	/// ```
	pub fn from_user_agent(user_agent: &str) -> Self {
		if user_agent.to_ascii_lowercase().contains("mobile") {
			Self::Touch
		} else {
			Self::Mouse
		}
	}

	#[must_use]
	/// Event that starts a drag on the handle.
	pub const fn drag_start(self) -> &'static str {
		match self {
			Self::Mouse => "mousedown",
			Self::Touch => "touchstart",
		}
	}

	#[must_use]
	/// Event that moves a drag, listened to process-wide.
	pub const fn drag_move(self) -> &'static str {
		match self {
			Self::Mouse => "mousemove",
			Self::Touch => "touchmove",
		}
	}

	#[must_use]
	/// Event that ends a drag, listened to process-wide.
	///
	/// This is also the event that triggers an instant seek on the bar.
	pub const fn drag_end(self) -> &'static str {
		match self {
			Self::Mouse => "mouseup",
			Self::Touch => "touchend",
		}
	}
}

//---------------------------------------------------------------------------------------------------- Pointer
/// A single touch point.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Touch {
	/// Horizontal viewport coordinate
	pub client_x: f64,
}

/// A pointer event as delivered by the platform.
///
/// Mouse events carry their coordinate directly, touch
/// events carry it inside the list of changed touches.
#[derive(Clone,Debug,PartialEq)]
pub enum Pointer {
	/// A mouse event
	Mouse {
		/// Horizontal viewport coordinate
		client_x: f64,
	},
	/// A touch event
	Touch {
		/// Touch points that changed in this event
		changed_touches: Vec<Touch>,
	},
}

impl Pointer {
	#[must_use]
	/// Shorthand for [`Pointer::Mouse`].
	pub const fn mouse(client_x: f64) -> Self {
		Self::Mouse { client_x }
	}

	#[must_use]
	/// Shorthand for a [`Pointer::Touch`] with a single changed touch.
	pub fn touch(client_x: f64) -> Self {
		Self::Touch { changed_touches: vec![Touch { client_x }] }
	}

	#[must_use]
	/// The horizontal coordinate of this event.
	///
	/// [`None`] for a touch event with no changed touches.
	///
	/// ```rust
	/// # use shikwasa::platform::*;
	/// assert_eq!(Pointer::mouse(0.0).client_x(), Some(0.0));
	/// assert_eq!(Pointer::touch(12.0).client_x(), Some(12.0));
	/// assert_eq!(Pointer::Touch { changed_touches: vec![] }.client_x(), None);
	/// ```
	pub fn client_x(&self) -> Option<f64> {
		match self {
			Self::Mouse { client_x } => Some(*client_x),
			Self::Touch { changed_touches } => changed_touches.first().map(|t| t.client_x),
		}
	}
}

//---------------------------------------------------------------------------------------------------- BarRect
/// Horizontal geometry of the seek bar wrapper, in viewport pixels.
#[derive(Copy,Clone,Debug,Default,PartialEq)]
pub struct BarRect {
	/// Left edge
	pub left: f64,
	/// Width
	pub width: f64,
}

impl BarRect {
	#[must_use]
	/// Create a [`BarRect`].
	pub const fn new(left: f64, width: f64) -> Self {
		Self { left, width }
	}

	#[must_use]
	/// Fraction (`0.0..=1.0`) of the bar at horizontal coordinate `x`.
	///
	/// A bar with no width always returns `0.0`.
	///
	/// ```rust
	/// # use shikwasa::platform::*;
	/// let bar = BarRect::new(100.0, 200.0);
	/// assert_eq!(bar.fraction_at(200.0), 0.5);
	/// assert_eq!(bar.fraction_at(0.0), 0.0);
	/// assert_eq!(bar.fraction_at(1000.0), 1.0);
	/// assert_eq!(BarRect::new(0.0, 0.0).fraction_at(5.0), 0.0);
	/// ```
	pub fn fraction_at(&self, x: f64) -> f64 {
		if self.width.is_nan() || self.width <= 0.0 {
			return 0.0;
		}

		let fraction = (x - self.left) / self.width;
		if fraction.is_nan() {
			0.0
		} else {
			fraction.clamp(0.0, 1.0)
		}
	}
}
