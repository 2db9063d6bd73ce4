use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{Inv, One, Pow, Zero};

use crate::modulus::{DynModulus, Modulus};
use crate::reduce::{
    AddReduce, AddReduceAssign, DivReduce, DivReduceAssign, InvReduce, MulReduce, MulReduceAssign,
    NegReduce, PowReduce, Reduce, SubReduce, SubReduceAssign, TryInvReduce,
};
use crate::ModularError;

/// An integer modulo a positive modulus, stored as the canonical
/// residue in `[0, modulus)`.
///
/// The binding strategy for the modulus is chosen through the type
/// parameter: [`ConstModulus`](crate::ConstModulus) for a compile-time
/// constant, [`OnceModulus`](crate::OnceModulus) for a tag-keyed
/// set-once process-wide modulus, and [`DynModulus`] for a modulus
/// carried by every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModInt<M: Modulus> {
    value: u64,
    modulus: M,
}

impl<M: Modulus + Default> ModInt<M> {
    /// Creates a new [`ModInt`], reducing `value` into range.
    ///
    /// # Panics
    ///
    /// Panics for a tag-keyed binding whose modulus was never set.
    #[inline]
    pub fn new(value: u64) -> Self {
        let modulus = M::default();
        Self {
            value: value.reduce(modulus.value()),
            modulus,
        }
    }

    /// Creates a new [`ModInt`] from a signed integer, normalizing
    /// negative values by adding the modulus.
    ///
    /// # Panics
    ///
    /// Panics for a tag-keyed binding whose modulus was never set.
    #[inline]
    pub fn from_signed(value: i64) -> Self {
        let modulus = M::default();
        Self {
            value: value.reduce(modulus.value()),
            modulus,
        }
    }

    /// Tries to create a new [`ModInt`], reducing `value` into range.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::UninitializedModulus`] for a tag-keyed
    /// binding whose modulus was never set.
    #[inline]
    pub fn try_new(value: u64) -> Result<Self, ModularError> {
        let modulus = M::default();
        Ok(Self {
            value: value.reduce(modulus.try_value()?),
            modulus,
        })
    }
}

impl ModInt<DynModulus> {
    /// Creates a new [`ModInt`] carrying `modulus`, reducing `value` into range.
    #[inline]
    pub fn new_with(value: u64, modulus: DynModulus) -> Self {
        Self {
            value: value.reduce(modulus.value()),
            modulus,
        }
    }

    /// Creates a new [`ModInt`] carrying `modulus` from a signed integer,
    /// normalizing negative values by adding the modulus.
    #[inline]
    pub fn from_signed_with(value: i64, modulus: DynModulus) -> Self {
        Self {
            value: value.reduce(modulus.value()),
            modulus,
        }
    }

    /// Parses a decimal digit sequence into a [`ModInt`] carrying `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::InvalidNumeral`] if the sequence is empty
    /// or contains any non-digit character.
    #[inline]
    pub fn parse_with(s: &str, modulus: DynModulus) -> Result<Self, ModularError> {
        Ok(Self {
            value: parse_residue(s, modulus.value())?,
            modulus,
        })
    }
}

impl<M: Modulus> ModInt<M> {
    /// Returns the canonical residue.
    #[inline]
    pub fn value(self) -> u64 {
        self.value
    }

    /// Returns the bound modulus.
    ///
    /// # Panics
    ///
    /// Panics for a tag-keyed binding whose modulus was never set.
    #[inline]
    pub fn modulus(self) -> u64 {
        self.modulus.value()
    }

    /// Adds one, wrapping from `modulus - 1` back to `0`.
    #[inline]
    pub fn increment(&mut self) {
        self.value += 1;
        if self.value == self.modulus.value() {
            self.value = 0;
        }
    }

    /// Subtracts one, wrapping from `0` back to `modulus - 1`.
    #[inline]
    pub fn decrement(&mut self) {
        if self.value == 0 {
            self.value = self.modulus.value();
        }
        self.value -= 1;
    }

    /// Calculates `self ^ exp` by binary exponentiation.
    #[inline]
    pub fn pow(self, exp: u64) -> Self {
        Self {
            value: self.value.pow_reduce(exp, self.modulus.value()),
            modulus: self.modulus,
        }
    }

    /// Calculates the multiplicative inverse of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and the modulus are not coprime.
    #[inline]
    pub fn inv(self) -> Self {
        Self {
            value: self.value.inv_reduce(self.modulus.value()),
            modulus: self.modulus,
        }
    }

    /// Tries to calculate the multiplicative inverse of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::NoInverse`] if `self` and the modulus
    /// are not coprime.
    #[inline]
    pub fn try_inv(self) -> Result<Self, ModularError> {
        Ok(Self {
            value: self.value.try_inv_reduce(self.modulus.value())?,
            modulus: self.modulus,
        })
    }
}

/// Accumulates a decimal digit sequence into a residue, reducing as it
/// goes so arbitrarily long numerals never overflow.
fn parse_residue(digits: &str, modulus: u64) -> Result<u64, ModularError> {
    if digits.is_empty() {
        return Err(ModularError::InvalidNumeral);
    }

    let ten = 10u64.reduce(modulus);
    let mut acc: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10).ok_or(ModularError::InvalidNumeral)?;
        acc.mul_reduce_assign(ten, modulus);
        acc.add_reduce_assign(u64::from(digit).reduce(modulus), modulus);
    }
    Ok(acc)
}

impl<M: Modulus> Add<Self> for ModInt<M> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        Self {
            value: self.value.add_reduce(rhs.value, self.modulus.value()),
            modulus: self.modulus,
        }
    }
}

impl<M: Modulus> AddAssign<Self> for ModInt<M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        self.value.add_reduce_assign(rhs.value, self.modulus.value());
    }
}

impl<M: Modulus> Sub<Self> for ModInt<M> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        Self {
            value: self.value.sub_reduce(rhs.value, self.modulus.value()),
            modulus: self.modulus,
        }
    }
}

impl<M: Modulus> SubAssign<Self> for ModInt<M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        self.value.sub_reduce_assign(rhs.value, self.modulus.value());
    }
}

impl<M: Modulus> Mul<Self> for ModInt<M> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        Self {
            value: self.value.mul_reduce(rhs.value, self.modulus.value()),
            modulus: self.modulus,
        }
    }
}

impl<M: Modulus> MulAssign<Self> for ModInt<M> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        self.value.mul_reduce_assign(rhs.value, self.modulus.value());
    }
}

impl<M: Modulus> Div<Self> for ModInt<M> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        Self {
            value: self.value.div_reduce(rhs.value, self.modulus.value()),
            modulus: self.modulus,
        }
    }
}

impl<M: Modulus> DivAssign<Self> for ModInt<M> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        assert!(self.modulus == rhs.modulus, "mismatched moduli");
        self.value.div_reduce_assign(rhs.value, self.modulus.value());
    }
}

impl<M: Modulus> Neg for ModInt<M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            value: self.value.neg_reduce(self.modulus.value()),
            modulus: self.modulus,
        }
    }
}

impl<M: Modulus> Pow<u64> for ModInt<M> {
    type Output = Self;

    #[inline]
    fn pow(self, rhs: u64) -> Self::Output {
        self.pow(rhs)
    }
}

impl<M: Modulus> Inv for ModInt<M> {
    type Output = Self;

    #[inline]
    fn inv(self) -> Self::Output {
        self.inv()
    }
}

impl<M: Modulus + Default> Zero for ModInt<M> {
    #[inline]
    fn zero() -> Self {
        Self::new(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<M: Modulus + Default> One for ModInt<M> {
    #[inline]
    fn one() -> Self {
        Self::new(1)
    }
}

impl<M: Modulus> Display for ModInt<M> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<M: Modulus + Default> FromStr for ModInt<M> {
    type Err = ModularError;

    /// Parses a decimal digit sequence with an optional leading `-`,
    /// rejecting any non-digit character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let modulus = M::default();
        let value = parse_residue(digits, modulus.value())?;
        let parsed = Self { value, modulus };

        if negative {
            Ok(-parsed)
        } else {
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{prelude::*, thread_rng};

    use crate::modulus_tag;
    use crate::{ConstModulus, OnceModulus};

    use super::*;

    const P: u64 = 97;
    type Fp = ModInt<ConstModulus<P>>;

    #[test]
    fn test_construction() {
        assert_eq!(Fp::new(0).value(), 0);
        assert_eq!(Fp::new(P).value(), 0);
        assert_eq!(Fp::new(P + 3).value(), 3);
        assert_eq!(Fp::from_signed(-1).value(), P - 1);
        assert_eq!(Fp::from_signed(-(P as i64)).value(), 0);
        assert_eq!(Fp::new(5).modulus(), P);
    }

    #[test]
    fn test_ring_ops() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            let a = rng.gen_range(0..P);
            let b = rng.gen_range(0..P);
            let (x, y) = (Fp::new(a), Fp::new(b));

            assert_eq!((x + y).value(), (a + b) % P);
            assert_eq!((x - y).value(), (P + a - b) % P);
            assert_eq!((x * y).value(), (a * b) % P);
            assert_eq!((x + (-x)).value(), 0);

            let mut z = x;
            z += y;
            z -= y;
            z *= y;
            assert_eq!(z, x * y);
        }
    }

    #[test]
    fn test_division() {
        let mut rng = thread_rng();

        for _ in 0..32 {
            let x = Fp::new(rng.gen_range(0..P));
            let y = Fp::new(rng.gen_range(1..P));
            assert_eq!((x / y) * y, x);
            assert_eq!((y * y.inv()).value(), 1);
            assert_eq!(y.try_inv().unwrap(), y.inv());
        }
    }

    #[test]
    fn test_pow() {
        let mut rng = thread_rng();
        let x = Fp::new(rng.gen_range(1..P));

        assert_eq!(x.pow(0).value(), 1);

        let mut by_mul = Fp::one();
        for exp in 1..32u64 {
            by_mul *= x;
            assert_eq!(x.pow(exp), by_mul);
        }

        // Fermat: x^(p-1) = 1 for prime p.
        assert_eq!(x.pow(P - 1), Fp::one());
    }

    #[test]
    fn test_wrapping() {
        let mut x = Fp::new(P - 1);
        x.increment();
        assert_eq!(x.value(), 0);

        let mut y = Fp::zero();
        y.decrement();
        assert_eq!(y.value(), P - 1);

        let mut z = Fp::new(41);
        z.increment();
        assert_eq!(z.value(), 42);
        z.decrement();
        assert_eq!(z.value(), 41);
    }

    #[test]
    fn test_format_parse_round_trip() {
        for r in 0..P {
            let x = Fp::new(r);
            let parsed: Fp = x.to_string().parse().unwrap();
            assert_eq!(parsed, x);
        }
    }

    #[test]
    fn test_parse() {
        let big: Fp = "184467440737095516160".parse().unwrap();
        assert_eq!(big.value(), {
            // 2^64 * 10 mod 97, via 128-bit reference arithmetic.
            ((u64::MAX as u128 + 1) * 10 % P as u128) as u64
        });

        let negative: Fp = "-1".parse().unwrap();
        assert_eq!(negative.value(), P - 1);

        assert_eq!("".parse::<Fp>(), Err(ModularError::InvalidNumeral));
        assert_eq!("12a3".parse::<Fp>(), Err(ModularError::InvalidNumeral));
        assert_eq!("+5".parse::<Fp>(), Err(ModularError::InvalidNumeral));
        assert_eq!("-".parse::<Fp>(), Err(ModularError::InvalidNumeral));
    }

    #[test]
    fn test_dynamic_modulus() {
        let m17 = DynModulus::new(17);
        let a = ModInt::new_with(20, m17);
        assert_eq!(a.value(), 3);
        assert_eq!(a.modulus(), 17);

        let b = ModInt::from_signed_with(-1, m17);
        assert_eq!(b.value(), 16);
        assert_eq!((a + b).value(), 2);

        let parsed = ModInt::parse_with("100", m17).unwrap();
        assert_eq!(parsed.value(), 100 % 17);
        assert_eq!(
            ModInt::parse_with("-1", m17),
            Err(ModularError::InvalidNumeral)
        );
    }

    #[test]
    #[should_panic(expected = "mismatched moduli")]
    fn test_mixed_moduli() {
        let a = ModInt::new_with(1, DynModulus::new(17));
        let b = ModInt::new_with(1, DynModulus::new(19));
        let _ = a + b;
    }

    modulus_tag!(struct Shared);

    #[test]
    fn test_once_modulus() {
        type Tagged = ModInt<OnceModulus<Shared>>;

        assert_eq!(
            Tagged::try_new(5),
            Err(ModularError::UninitializedModulus { tag: "Shared" })
        );

        OnceModulus::<Shared>::set(11).unwrap();

        let x = Tagged::new(13);
        assert_eq!(x.value(), 2);
        assert_eq!(x.modulus(), 11);
        assert_eq!((x * x).value(), 4);
        assert_eq!(Tagged::try_new(5).unwrap().value(), 5);
    }
}
