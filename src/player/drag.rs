//! Drag-to-seek.
//!
//! A gesture is `drag_start → drag_move* → drag_end`. While it is in
//! progress the bar and time label show a preview, the resource is
//! only seeked on release. Move/release are listened to process-wide
//! so the drag survives the pointer leaving the (narrow) bar.
//!
//! A release on the bar without a drag is an instant seek.

//---------------------------------------------------------------------------------------------------- Use
use crate::{
	macros::trace2,
	platform::{Platform,View,Pointer,BarKind},
	player::{Player,player::DragListeners},
	state::UiFlag,
};

//----------------------------------------------------------------------------------------------------
impl<P: Platform> Player<P> {
	/// The handle was pressed, start a drag gesture.
	///
	/// Registers process-wide listeners for [`crate::platform::Input::drag_move`]
	/// and [`crate::platform::Input::drag_end`], the host should route those
	/// to [`Player::drag_move`] and [`Player::drag_end`].
	pub fn drag_start(&mut self) {
		if self.disposed || self.drag.is_some() {
			return;
		}

		self.set_flag(UiFlag::Seeking, true);
		self.state.dragging = true;

		let on_move = self.platform.listen(self.input.drag_move());
		let on_end  = self.platform.listen(self.input.drag_end());
		self.drag = Some(DragListeners { on_move, on_end });

		trace2!("player: drag start");
	}

	/// The pointer moved during a drag, preview the position under it.
	pub fn drag_move(&mut self, pointer: &Pointer) {
		if self.drag.is_none() {
			return;
		}

		self.preview(pointer);
	}

	/// The pointer was released, end the drag and commit the preview.
	pub fn drag_end(&mut self) {
		let Some(listeners) = self.drag.take() else {
			return;
		};

		self.release_drag(listeners);
		self.set_flag(UiFlag::Seeking, false);
		self.seek(self.state.current_time);

		trace2!("player: drag end");
	}

	/// The pointer was released on the bar itself.
	///
	/// Outside of a drag this seeks straight to the position under
	/// the pointer. During a drag it is ignored, the release that
	/// ends the drag already commits.
	pub fn bar_release(&mut self, pointer: &Pointer) {
		if self.disposed || self.state.dragging {
			return;
		}

		if self.preview(pointer) {
			self.seek(self.state.current_time);
		}
	}

	/// Stop both process-wide listeners of a gesture.
	pub(super) fn release_drag(&mut self, listeners: DragListeners) {
		self.platform.unlisten(listeners.on_move);
		self.platform.unlisten(listeners.on_end);
		self.state.dragging = false;
	}

	/// Show the position under `pointer` without seeking the resource.
	///
	/// Returns `false` if the event had no coordinate.
	fn preview(&mut self, pointer: &Pointer) -> bool {
		let Some(x) = pointer.client_x() else {
			return false;
		};

		let fraction = self.view.bar_rect().fraction_at(x);
		self.set_bar(BarKind::AudioPlayed, fraction);
		self.state.current_time = fraction * self.duration();
		self.set_time_label(self.state.current_time);

		true
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use crate::{
		platform::{Input,Pointer,BarRect,Label, dummy::DummyPlatform},
		state::UiFlag,
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn drag_commits_on_release() {
		let mut player = crate::tests::loaded(200.0);

		player.drag_start();
		assert!(player.flags().contains(UiFlag::Seeking));
		assert!(player.state().dragging);
		assert!(player.platform().is_listening("mousemove"));
		assert!(player.platform().is_listening("mouseup"));

		player.drag_move(&Pointer::mouse(50.0));
		assert_eq!(player.bar().played(), 0.5);
		assert_eq!(player.state().current_time, 100.0);
		assert_eq!(player.view().text(Label::CurrentTime), "01:40");
		// Only a preview.
		assert_eq!(player.audio().unwrap().current_time, 0.0);

		player.drag_end();
		assert!(!player.flags().contains(UiFlag::Seeking));
		assert!(!player.state().dragging);
		assert_eq!(player.audio().unwrap().current_time, 100.0);
		assert!(!player.platform().is_listening("mousemove"));
		assert!(!player.platform().is_listening("mouseup"));
	}

	#[test]
	fn drag_clamps() {
		let mut player = crate::tests::loaded(200.0);
		player.drag_start();

		player.drag_move(&Pointer::mouse(-40.0));
		assert_eq!(player.state().current_time, 0.0);

		player.drag_move(&Pointer::mouse(400.0));
		assert_eq!(player.state().current_time, 200.0);
		assert_eq!(player.bar().played(), 1.0);

		player.drag_end();
		assert_eq!(player.audio().unwrap().current_time, 200.0);
	}

	#[test]
	fn listeners_are_paired() {
		let mut player = crate::tests::loaded(200.0);
		let before = player.platform().listeners.len();

		// A second start doesn't register twice.
		player.drag_start();
		player.drag_start();
		assert_eq!(player.platform().listeners.len(), before + 2);

		// A second end doesn't remove twice (the dummy would panic).
		player.drag_end();
		player.drag_end();
		assert_eq!(player.platform().listeners.len(), before);

		// Moves outside a gesture are ignored.
		player.drag_move(&Pointer::mouse(75.0));
		assert_eq!(player.bar().played(), 0.0);
	}

	#[test]
	fn instant_seek() {
		let mut player = crate::tests::loaded(200.0);

		player.bar_release(&Pointer::mouse(25.0));
		assert_eq!(player.audio().unwrap().current_time, 50.0);
		assert_eq!(player.bar().played(), 0.25);
		assert!(!player.flags().contains(UiFlag::Seeking));
		assert!(!player.view().flags.contains(UiFlag::Seeking));
	}

	#[test]
	fn release_after_drag_seeks_once() {
		let mut player = crate::tests::loaded(200.0);

		player.drag_start();
		player.drag_move(&Pointer::mouse(50.0));

		// The bar sees the release first, then the document.
		player.bar_release(&Pointer::mouse(90.0));
		assert_eq!(player.audio().unwrap().current_time, 0.0);
		player.drag_end();
		assert_eq!(player.audio().unwrap().current_time, 100.0);
	}

	#[test]
	fn touch_input() {
		let mut platform = DummyPlatform::new();
		platform.input = Input::Touch;
		platform.bar_rect = BarRect::new(20.0, 200.0);
		let mut player = crate::tests::init_with(platform, crate::tests::config());
		assert_eq!(player.input(), Input::Touch);

		player.drag_start();
		assert!(player.platform().is_listening("touchmove"));
		assert!(player.platform().is_listening("touchend"));

		player.drag_move(&Pointer::touch(70.0));
		assert_eq!(player.bar().played(), 0.25);

		// No coordinate, no change.
		player.drag_move(&Pointer::Touch { changed_touches: vec![] });
		assert_eq!(player.bar().played(), 0.25);

		player.drag_end();
		assert_eq!(player.state().current_time, 25.0);
		assert!(!player.platform().is_listening("touchmove"));
	}

	#[test]
	fn drag_before_audio_exists() {
		let mut player = crate::tests::init();
		player.drag_start();
		player.drag_move(&Pointer::mouse(30.0));
		player.drag_end();

		assert!(player.audio().is_none());
		assert_eq!(player.state().current_time, 30.0);

		player.init_audio();
		assert_eq!(player.audio().unwrap().current_time, 30.0);
	}
}
