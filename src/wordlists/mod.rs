//! Dictionary loading
//!
//! The interactive loop and the simulation commands all start from a plain
//! text word list, one word per line.

pub mod loader;
