#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::modulus::Modulus;
use crate::ModularError;

/// An instance-carried modulus.
///
/// Each value bound to a `DynModulus` stores its own copy, so different
/// instances may use different moduli. Mixing two values with different
/// moduli in a binary operator is rejected by the value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynModulus {
    /// the u64 value to indicate the modulus
    value: u64,
}

impl DynModulus {
    /// Creates a new [`DynModulus`].
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[inline]
    pub const fn new(value: u64) -> Self {
        match value {
            0 => panic!("modulus can't be 0."),
            _ => Self { value },
        }
    }

    /// Tries to create a new [`DynModulus`], rejecting a zero modulus.
    #[inline]
    pub fn try_new(value: u64) -> Result<Self, ModularError> {
        if value == 0 {
            Err(ModularError::ZeroModulus)
        } else {
            Ok(Self { value })
        }
    }
}

impl Modulus for DynModulus {
    #[inline(always)]
    fn value(self) -> u64 {
        self.value
    }

    #[inline(always)]
    fn try_value(self) -> Result<u64, ModularError> {
        Ok(self.value)
    }
}
