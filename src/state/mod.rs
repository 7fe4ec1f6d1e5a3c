//! Interaction state: the viewer engine and its supporting machines.

pub mod key_sequence;
pub mod viewer;
pub mod visibility;

pub use key_sequence::{KeySequence, KEY_SEQUENCE_WINDOW};
pub use viewer::{DocMeta, Outcome, ViewMode, ViewerState};
