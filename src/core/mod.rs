//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and directly testable.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::Word;
