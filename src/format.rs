//! Text formatting for labels.

//---------------------------------------------------------------------------------------------------- Time
#[must_use]
/// Format `seconds` as `mm:ss`, or `hh:mm:ss` past an hour.
///
/// Fractions are truncated. Negative and non-finite input is `00:00`.
///
/// ```rust
/// # use shikwasa::format::*;
/// assert_eq!(second_to_time(0.0), "00:00");
/// assert_eq!(second_to_time(65.9), "01:05");
/// assert_eq!(second_to_time(3600.0), "01:00:00");
/// assert_eq!(second_to_time(f64::NAN), "00:00");
/// ```
pub fn second_to_time(seconds: f64) -> String {
	let total = if seconds.is_finite() && seconds > 0.0 {
		seconds.floor() as u64
	} else {
		0
	};

	let hour = total / 3600;
	let min  = (total % 3600) / 60;
	let sec  = total % 60;

	if hour > 0 {
		format!("{hour:02}:{min:02}:{sec:02}")
	} else {
		format!("{min:02}:{sec:02}")
	}
}

//---------------------------------------------------------------------------------------------------- Speed
#[must_use]
/// Format a playback rate for the speed button.
///
/// Two decimals, with a single trailing zero dropped.
///
/// ```rust
/// # use shikwasa::format::*;
/// assert_eq!(speed_label(1.0), "1.0x");
/// assert_eq!(speed_label(1.5), "1.5x");
/// assert_eq!(speed_label(1.25), "1.25x");
/// assert_eq!(speed_label(0.75), "0.75x");
/// ```
pub fn speed_label(speed: f64) -> String {
	let mut s = format!("{speed:.2}");
	if s.ends_with('0') {
		s.pop();
	}
	s.push('x');
	s
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn time_boundaries() {
		assert_eq!(second_to_time(-5.0), "00:00");
		assert_eq!(second_to_time(f64::INFINITY), "00:00");
		assert_eq!(second_to_time(59.999), "00:59");
		assert_eq!(second_to_time(60.0), "01:00");
		assert_eq!(second_to_time(3599.0), "59:59");
		assert_eq!(second_to_time(3661.0), "01:01:01");
		assert_eq!(second_to_time(360_000.0), "100:00:00");
	}

	#[test]
	fn speed() {
		assert_eq!(speed_label(2.0), "2.0x");
		assert_eq!(speed_label(0.5), "0.5x");
	}
}
