#![deny(missing_docs)]

//! Exact arithmetic over the integers modulo a positive integer.
//!
//! The value type is [`ModInt`], generic over how its modulus is bound:
//!
//! - [`ConstModulus`] — a compile-time constant shared by every instance
//!   of the type;
//! - [`OnceModulus`] — a tag-keyed, set-once process-wide modulus,
//!   declared with [`modulus_tag!`];
//! - [`DynModulus`] — a modulus carried by each instance, so different
//!   values may use different moduli.
//!
//! The arithmetic itself lives in the [`reduce`] trait family over bare
//! `u64` values, usable directly when no wrapper type is wanted.

mod error;
mod modint;
pub mod modulus;
pub mod reduce;

pub use error::ModularError;
pub use modint::ModInt;
pub use modulus::{ConstModulus, DynModulus, Modulus, ModulusTag, OnceModulus};

// Re-exported for the `modulus_tag!` macro expansion.
#[doc(hidden)]
pub use once_cell;
