//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModularError {
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when a tag-bound modulus is read before it was set.
    #[error("The modulus for tag `{tag}` was read before being set!")]
    UninitializedModulus {
        /// The tag whose modulus is uninitialized.
        tag: &'static str,
    },
    /// Error that occurs when a tag-bound modulus is set a second time.
    #[error("The modulus for tag `{tag}` was already set!")]
    AlreadySet {
        /// The tag whose modulus is already set.
        tag: &'static str,
    },
    /// Error that occurs when user asks to bind the modulus zero.
    #[error("The modulus can't be zero!")]
    ZeroModulus,
    /// Error that occurs when parsing a modular numeral fails.
    #[error("A modular numeral must be a non-empty decimal digit sequence!")]
    InvalidNumeral,
}
