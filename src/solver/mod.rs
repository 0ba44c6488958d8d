//! Constraint-tracking solver
//!
//! The position index maintains which remaining candidates have which letter
//! where; the engine turns feedback rounds into eliminations and recommends
//! the next guess.

mod engine;
mod index;

pub use engine::{Phase, Solver};
pub use index::PositionIndex;
