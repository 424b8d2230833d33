//! Instance-owned timers.
//!
//! The [`crate::Player`] never hands a callback to the host's timer
//! facilities. It records what should happen and when in [`Timers`],
//! and [`crate::Player::tick`] asks which timers are due against
//! [`crate::platform::Platform::now`].
//!
//! Dropping [`Timers`] (or calling [`Timers::clear`]) cancels
//! everything, nothing can outlive the player.

//---------------------------------------------------------------------------------------------------- Use
use std::time::Duration;

//---------------------------------------------------------------------------------------------------- TimerKind
/// What to do when a timer fires.
#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub(crate) enum TimerKind {
	/// Issue the resource `play()` that the UI already promised.
	DeferredPlay,
	/// Move the title carousel one step.
	Carousel,
}

//---------------------------------------------------------------------------------------------------- TimerId
#[derive(Copy,Clone,Debug,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub(crate) struct TimerId(u64);

//---------------------------------------------------------------------------------------------------- Timers
#[derive(Copy,Clone,Debug)]
struct Entry {
	id: TimerId,
	kind: TimerKind,
	due: Duration,
	// `Some` for intervals.
	period: Option<Duration>,
}

#[derive(Clone,Debug,Default)]
pub(crate) struct Timers {
	next_id: u64,
	entries: Vec<Entry>,
}

impl Timers {
	pub(crate) const fn new() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}

	fn push(&mut self, kind: TimerKind, due: Duration, period: Option<Duration>) -> TimerId {
		self.next_id += 1;
		let id = TimerId(self.next_id);
		self.entries.push(Entry { id, kind, due, period });
		id
	}

	/// Fire `kind` once, `delay` after `now`.
	pub(crate) fn timeout(&mut self, kind: TimerKind, now: Duration, delay: Duration) -> TimerId {
		self.push(kind, now + delay, None)
	}

	/// Fire `kind` every `period` starting `period` after `now`.
	///
	/// A zero `period` is treated as 1ms.
	pub(crate) fn interval(&mut self, kind: TimerKind, now: Duration, period: Duration) -> TimerId {
		let period = period.max(Duration::from_millis(1));
		self.push(kind, now + period, Some(period))
	}

	/// Cancel `id`, returns `false` if it already fired or was cancelled.
	pub(crate) fn cancel(&mut self, id: TimerId) -> bool {
		let len = self.entries.len();
		self.entries.retain(|e| e.id != id);
		self.entries.len() != len
	}

	pub(crate) fn is_pending(&self, id: TimerId) -> bool {
		self.entries.iter().any(|e| e.id == id)
	}

	#[cfg(test)]
	pub(crate) fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub(crate) fn clear(&mut self) {
		self.entries.clear();
	}

	/// Everything due at `now`, in firing order.
	///
	/// Timeouts are removed, intervals fire at most once and are
	/// re-armed a full `period` after `now`. Periods missed during
	/// a long gap between calls are dropped, not replayed.
	pub(crate) fn expire(&mut self, now: Duration) -> Vec<(TimerId, TimerKind)> {
		let mut fired: Vec<(Duration, TimerId, TimerKind)> = Vec::new();

		self.entries.retain_mut(|entry| {
			match entry.period {
				None => {
					if entry.due <= now {
						fired.push((entry.due, entry.id, entry.kind));
						false
					} else {
						true
					}
				},
				Some(period) => {
					if entry.due <= now {
						fired.push((entry.due, entry.id, entry.kind));
						entry.due = now + period;
					}
					true
				},
			}
		});

		fired.sort_by_key(|(due, id, _)| (*due, *id));
		fired.into_iter().map(|(_, id, kind)| (id, kind)).collect()
	}
}
