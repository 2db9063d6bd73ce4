//! This module defines the traits for modular arithmetic
//! and implements them for the primitive `u64` modulus.

mod ops;
mod primitive;

pub use ops::*;
