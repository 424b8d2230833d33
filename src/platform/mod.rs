//! The seam between the [`Player`] and whatever hosts it.
//!
//! A host (a wasm binding to a real document, a native UI, a
//! test harness) implements [`Platform`], which hands out an
//! [`AudioResource`] and a [`View`] and owns the process-wide
//! listeners and the clock.
//!
//! The [`dummy`] module is a complete in-memory host.

#[allow(unused_imports)] // docs
use crate::Player;

mod platform;
pub use platform::Platform;

mod audio;
pub use audio::AudioResource;

mod view;
pub use view::{View,Label,Button,BarKind};

mod input;
pub use input::{Input,Pointer,Touch,BarRect};

mod event;
pub use event::{ResourceEvent,ListenerId};

pub mod dummy;
