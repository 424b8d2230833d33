//! Track descriptors.

mod track;
pub use track::Track;
