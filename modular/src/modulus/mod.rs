//! Defines the three strategies for binding a modulus to a value:
//! a compile-time constant, a tag-keyed set-once process-wide cell,
//! and an instance-carried runtime value.

use std::fmt::Debug;

use crate::ModularError;

mod constant;
mod dynamic;
mod once;

pub use constant::ConstModulus;
pub use dynamic::DynModulus;
pub use once::{ModulusTag, OnceModulus};

/// A helper trait to get the modulus bound to a value.
pub trait Modulus: Debug + Clone + Copy + PartialEq + Eq {
    /// Returns the bound modulus.
    ///
    /// # Panics
    ///
    /// Panics for a tag-keyed binding whose modulus was never set.
    fn value(self) -> u64;

    /// Returns the bound modulus, or an error if it is not available yet.
    fn try_value(self) -> Result<u64, ModularError>;
}
