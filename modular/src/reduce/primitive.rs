use crate::reduce::{
    AddReduce, AddReduceAssign, DivReduce, DivReduceAssign, InvReduce, MulReduce, MulReduceAssign,
    NegReduce, NegReduceAssign, PowReduce, Reduce, SubReduce, SubReduceAssign, TryInvReduce,
};
use crate::ModularError;

impl Reduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn reduce(self, modulus: u64) -> Self::Output {
        self % modulus
    }
}

impl Reduce<u64> for i64 {
    type Output = u64;

    /// Negative values are normalized by adding the modulus.
    #[inline]
    fn reduce(self, modulus: u64) -> Self::Output {
        let r = self.unsigned_abs() % modulus;
        if self < 0 && r != 0 {
            modulus - r
        } else {
            r
        }
    }
}

impl AddReduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn add_reduce(self, rhs: Self, modulus: u64) -> Self::Output {
        // The sum can wrap for moduli close to 2^64.
        let (sum, overflow) = self.overflowing_add(rhs);
        if overflow || sum >= modulus {
            sum.wrapping_sub(modulus)
        } else {
            sum
        }
    }
}

impl AddReduceAssign<u64> for u64 {
    #[inline]
    fn add_reduce_assign(&mut self, rhs: Self, modulus: u64) {
        *self = self.add_reduce(rhs, modulus);
    }
}

impl SubReduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn sub_reduce(self, rhs: Self, modulus: u64) -> Self::Output {
        if self >= rhs {
            self - rhs
        } else {
            modulus - rhs + self
        }
    }
}

impl SubReduceAssign<u64> for u64 {
    #[inline]
    fn sub_reduce_assign(&mut self, rhs: Self, modulus: u64) {
        if *self >= rhs {
            *self -= rhs;
        } else {
            *self += modulus - rhs;
        }
    }
}

impl NegReduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn neg_reduce(self, modulus: u64) -> Self::Output {
        if self == 0 {
            0
        } else {
            modulus - self
        }
    }
}

impl NegReduceAssign<u64> for u64 {
    #[inline]
    fn neg_reduce_assign(&mut self, modulus: u64) {
        *self = self.neg_reduce(modulus);
    }
}

impl MulReduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn mul_reduce(self, rhs: Self, modulus: u64) -> Self::Output {
        // The u128 intermediate holds (modulus - 1)^2 for any u64 modulus.
        ((self as u128 * rhs as u128) % modulus as u128) as u64
    }
}

impl MulReduceAssign<u64> for u64 {
    #[inline]
    fn mul_reduce_assign(&mut self, rhs: Self, modulus: u64) {
        *self = self.mul_reduce(rhs, modulus);
    }
}

impl PowReduce<u64, u64> for u64 {
    fn pow_reduce(self, mut exp: u64, modulus: u64) -> Self {
        debug_assert!(self < modulus);

        let mut power: Self = self;
        // `1 % modulus` keeps the accumulator canonical for modulus one.
        let mut intermediate: Self = 1 % modulus;
        while exp != 0 {
            if exp & 1 != 0 {
                intermediate = intermediate.mul_reduce(power, modulus);
            }
            exp >>= 1;
            power = power.mul_reduce(power, modulus);
        }
        intermediate
    }
}

impl InvReduce for u64 {
    #[inline]
    fn inv_reduce(self, modulus: Self) -> Self {
        match self.try_inv_reduce(modulus) {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        }
    }
}

impl TryInvReduce for u64 {
    /// The extended Euclidean algorithm, with the Bézout coefficient
    /// tracked as a residue so no signed arithmetic is needed.
    fn try_inv_reduce(self, modulus: Self) -> Result<Self, ModularError> {
        debug_assert!(self < modulus);

        let (mut r, mut new_r) = (modulus, self);
        let (mut s, mut new_s): (u64, u64) = (0, 1 % modulus);

        while new_r != 0 {
            let q = r / new_r;
            s.sub_reduce_assign(q.reduce(modulus).mul_reduce(new_s, modulus), modulus);
            r -= q * new_r;
            std::mem::swap(&mut s, &mut new_s);
            std::mem::swap(&mut r, &mut new_r);
        }

        if r == 1 {
            Ok(s)
        } else {
            Err(ModularError::NoInverse {
                value: self,
                modulus,
            })
        }
    }
}

impl DivReduce<u64> for u64 {
    type Output = u64;

    #[inline]
    fn div_reduce(self, rhs: Self, modulus: u64) -> Self::Output {
        self.mul_reduce(rhs.inv_reduce(modulus), modulus)
    }
}

impl DivReduceAssign<u64> for u64 {
    #[inline]
    fn div_reduce_assign(&mut self, rhs: Self, modulus: u64) {
        *self = self.div_reduce(rhs, modulus);
    }
}
