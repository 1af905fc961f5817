//! This module has the things a smoother works on:
//! the sequence being relaxed and the pins that hold
//! some of its positions fixed.
//! A sequence never changes length once created,
//! and pins are only ever written, never blended.

mod pins;
mod sequence;

pub use pins::*;
pub use sequence::*;
