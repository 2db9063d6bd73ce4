use crate::modulus::Modulus;
use crate::ModularError;

/// A compile-time constant modulus.
///
/// Every instance of a type bound to `ConstModulus<M>` shares the
/// modulus `M`; no per-instance state is stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConstModulus<const M: u64>;

impl<const M: u64> Modulus for ConstModulus<M> {
    #[inline(always)]
    fn value(self) -> u64 {
        const {
            assert!(M > 0, "modulus must be positive");
        }
        M
    }

    #[inline(always)]
    fn try_value(self) -> Result<u64, ModularError> {
        Ok(self.value())
    }
}
