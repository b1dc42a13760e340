//! Color data structures.

mod color;
mod reference;

pub use color::Rgb;
pub use reference::{ReferenceSet, ReferenceSlot};
