//! Headless controller for an embeddable audio player widget.
//!
//! This is the API reference for `shikwasa`, meant to solely
//! document inputs/outputs and other note-worthy things.
//!
//! The crate owns the behavior of the player (what the buttons do,
//! what the seek bar shows, when audio actually starts) while the
//! host owns the document, the audio element and the markup. The two
//! meet at the [`platform::Platform`] trait.
//!
//! ```rust
//! # use shikwasa::*;
//! # use shikwasa::config::*;
//! # use shikwasa::track::*;
//! # use shikwasa::state::*;
//! # use shikwasa::platform::dummy::DummyPlatform;
//! # use std::time::Duration;
//! let mut config = Config::DEFAULT;
//! config.audio.push(Track::new("a.mp3").with_duration(100.0));
//!
//! let mut player = Player::init(DummyPlatform::new(), config).unwrap();
//! assert!(player.flags().contains(UiFlag::Pause));
//!
//! // The UI flips immediately...
//! player.play(None);
//! assert!(player.flags().contains(UiFlag::Play));
//! assert!(player.audio().unwrap().paused);
//!
//! // ...the audio itself starts after a short delay.
//! player.platform_mut().advance(Duration::from_millis(500));
//! player.tick();
//! assert!(!player.audio().unwrap().paused);
//! ```

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
    clippy::len_zero,
    clippy::type_complexity,
    clippy::module_inception,
)]

#![deny(
    nonstandard_style,
    deprecated,
    missing_docs,
)]

#![forbid(
    unused_mut,
    unused_unsafe,
    future_incompatible,
    break_with_label_and_loop,
    coherence_leak_check,
    duplicate_macro_attributes,
    exported_private_dependencies,
    for_loops_over_fallibles,
    large_assignments,
    overlapping_range_endpoints,
    semicolon_in_expressions_from_macros,
    redundant_semicolons,
    unconditional_recursion,
    unreachable_patterns,
    unused_allocation,
    unused_braces,
    unused_comparisons,
    unused_doc_comments,
    unused_parens,
    unused_labels,
    while_true,
    keyword_idents,
    non_ascii_idents,
    noop_method_call,
)]

//---------------------------------------------------------------------------------------------------- Public API
mod player;
pub use player::Player;

pub mod config;
pub mod track;
pub mod error;
pub mod platform;
pub mod state;
pub mod bar;
pub mod format;

//---------------------------------------------------------------------------------------------------- Private Usage
mod timer;
mod carousel;
mod macros;

#[cfg(test)]
mod tests;

//----------------------------------------------------------------------------------------------------
